//! Length band - scores raw password length.

use super::Band;
use crate::types::Finding;

/// Passwords at least this long earn the flat bonus on top of all bands.
pub const LENGTH_BONUS_THRESHOLD: usize = 20;

/// Flat bonus applied after bands and penalties, before clamping.
pub const LENGTH_BONUS: i64 = 10;

/// Scores password length on a 0-25 band.
pub fn length_section(length: usize) -> Band {
    if length < 8 {
        Band {
            points: length as i64 * 2,
            finding: Finding::error(
                "Password is too short. Minimum recommended length is 12 characters.",
            ),
        }
    } else if length < 12 {
        Band {
            points: 15 + (length as i64 - 8) * 2,
            finding: Finding::warning(
                "Password length is acceptable but could be stronger with 12+ characters.",
            ),
        }
    } else if length < 16 {
        Band {
            points: 20 + (length as i64 - 12),
            finding: Finding::info(
                "Good password length. Excellent protection against brute force attacks.",
            ),
        }
    } else {
        Band {
            points: 25,
            finding: Finding::info("Excellent password length. Maximum protection achieved."),
        }
    }
}
