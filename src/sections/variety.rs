//! Character variety band - scores diversity across the four classes.

use super::Band;
use crate::types::{CharsetProfile, Finding};

/// Scores character-class diversity on a 5-25 band.
///
/// A password with no recognized classes at all is scored in the
/// single-class bucket; the evaluator pairs that case with a dedicated
/// unrecognized-charset finding.
pub fn character_variety_section(profile: &CharsetProfile) -> Band {
    match profile.class_count() {
        0 | 1 => Band {
            points: 5,
            finding: Finding::error(
                "Uses only one character type. Mix uppercase, lowercase, numbers, and symbols.",
            ),
        },
        2 => Band {
            points: 12,
            finding: Finding::warning(
                "Limited character diversity. Add more character types for better security.",
            ),
        },
        3 => Band {
            points: 20,
            finding: Finding::info("Good character diversity across multiple types."),
        },
        _ => Band {
            points: 25,
            finding: Finding::info("Excellent character diversity using all character types."),
        },
    }
}
