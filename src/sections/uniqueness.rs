//! Uniqueness band - scores the share of distinct characters.

use std::collections::HashSet;

use super::Band;
use crate::types::Finding;

/// Computes the uniqueness percentage (distinct characters over length,
/// rounded) and scores it on a 0-15 band. The caller guarantees a
/// non-empty password.
pub fn uniqueness_section(password: &str) -> (u8, Band) {
    let length = password.chars().count();
    let distinct: HashSet<char> = password.chars().collect();
    let percent = ((distinct.len() as f64 / length as f64) * 100.0).round() as u8;

    let band = if percent < 50 {
        Band {
            points: (f64::from(percent) / 10.0).round() as i64,
            finding: Finding::error(
                "Too many repeated characters detected. Use more unique characters.",
            ),
        }
    } else if percent < 70 {
        Band {
            points: 8 + ((f64::from(percent) - 50.0) / 5.0).round() as i64,
            finding: Finding::warning(
                "Moderate character repetition. Increase uniqueness for better security.",
            ),
        }
    } else {
        Band {
            points: 15,
            finding: Finding::info("High character uniqueness provides good randomness."),
        }
    };

    (percent, band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_all_distinct_characters() {
        let (percent, band) = uniqueness_section("abcdefgh");
        assert_eq!(percent, 100);
        assert_eq!(band.points, 15);
        assert_eq!(band.finding.severity, Severity::Info);
    }

    #[test]
    fn test_single_repeated_character() {
        // 1 distinct over 20 chars = 5%, rounds to 1 point
        let (percent, band) = uniqueness_section(&"a".repeat(20));
        assert_eq!(percent, 5);
        assert_eq!(band.points, 1);
        assert_eq!(band.finding.severity, Severity::Error);
    }

    #[test]
    fn test_moderate_repetition() {
        // 6 distinct over 10 chars = 60% -> 8 + round(10/5) = 10 points
        let (percent, band) = uniqueness_section("aabbccddef");
        assert_eq!(percent, 60);
        assert_eq!(band.points, 10);
        assert_eq!(band.finding.severity, Severity::Warning);
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        // 5 distinct over 8 chars = 62.5% -> 63
        let (percent, _) = uniqueness_section("aaabbcde");
        assert_eq!(percent, 63);
    }
}
