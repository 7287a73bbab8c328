//! Entropy band - scores theoretical keyspace entropy.

use super::Band;
use crate::types::Finding;

/// Scores entropy (in bits) on a 0-25 band. Boundaries are applied to the
/// raw floating-point value; points round to the nearest integer.
pub fn entropy_section(entropy_bits: f64) -> Band {
    if entropy_bits < 28.0 {
        Band {
            points: (entropy_bits / 2.0).round() as i64,
            finding: Finding::error(
                "Very low entropy. Password is vulnerable to brute force attacks.",
            ),
        }
    } else if entropy_bits < 50.0 {
        Band {
            points: 14 + ((entropy_bits - 28.0) / 3.0).round() as i64,
            finding: Finding::warning("Moderate entropy. Consider increasing complexity."),
        }
    } else if entropy_bits < 70.0 {
        Band {
            points: 20 + ((entropy_bits - 50.0) / 5.0).round() as i64,
            finding: Finding::info("Good entropy level. Strong resistance to brute force."),
        }
    } else {
        Band {
            points: 25,
            finding: Finding::info("Excellent entropy. Maximum cryptographic strength."),
        }
    }
}
