//! Keyboard pattern check - adjacency runs from common layouts.

use crate::types::Finding;

/// Deduction when a keyboard pattern is found.
pub const KEYBOARD_PENALTY: i64 = 15;

const KEYBOARD_PATTERNS: [&str; 7] = [
    "qwerty", "asdfgh", "zxcvbn", "qwertz", "azerty", "!@#$%^", "qweasd",
];

/// Case-insensitive substring match against known keyboard-adjacency runs.
pub fn keyboard_section(password: &str) -> Option<Finding> {
    let lower = password.to_lowercase();
    if KEYBOARD_PATTERNS.iter().any(|pattern| lower.contains(pattern)) {
        return Some(Finding::error(
            "Contains keyboard patterns (e.g., qwerty, asdf). Use random combinations.",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwerty_run() {
        assert!(keyboard_section("myQWERTYpass").is_some());
    }

    #[test]
    fn test_symbol_row_run() {
        assert!(keyboard_section("pass!@#$%^word").is_some());
    }

    #[test]
    fn test_azerty_layout() {
        assert!(keyboard_section("azerty99").is_some());
    }

    #[test]
    fn test_partial_run_does_not_fire() {
        assert!(keyboard_section("qwer").is_none());
    }

    #[test]
    fn test_clean_password() {
        assert!(keyboard_section("Tr0ub4dor&3").is_none());
    }
}
