//! Charset estimation and theoretical entropy.

use crate::types::CharsetProfile;

/// The fixed 32-character symbol set recognized as the fourth class.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?`~";

/// Detects which character classes are present in the password.
///
/// Membership tests only; counts do not matter. Classes are ASCII-only,
/// so accented letters and whitespace fall outside all four classes.
pub fn charset_profile(password: &str) -> CharsetProfile {
    CharsetProfile {
        has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
        has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(|c| SYMBOLS.contains(c)),
    }
}

/// Theoretical entropy in bits: `log2(alphabet_size ^ length)`.
///
/// Assumes uniform random selection from the detected alphabet, so this is
/// an upper bound on search difficulty. Returns `0.0` when the alphabet is
/// empty rather than propagating a non-finite value; the evaluator pairs
/// that case with a dedicated finding.
pub fn entropy_bits(alphabet_size: u32, length: usize) -> f64 {
    if alphabet_size == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * f64::from(alphabet_size).log2()
}
