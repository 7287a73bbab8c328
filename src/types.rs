//! Result types produced by password analysis.

use std::fmt;

/// Severity of a single diagnostic finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One diagnostic message emitted by a specific check.
///
/// Findings are collected in the order the checks run; the order matters
/// for display but carries no ranking semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Qualitative strength tier derived from the final clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Tier {
    /// Maps a clamped 0-100 score to its tier. Boundaries are half-open:
    /// `<30` weak, `<55` medium, `<75` strong, otherwise very strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..30 => Tier::Weak,
            30..55 => Tier::Medium,
            55..75 => Tier::Strong,
            _ => Tier::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Weak => "weak",
            Tier::Medium => "medium",
            Tier::Strong => "strong",
            Tier::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the four recognized character classes are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsetProfile {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharsetProfile {
    /// Number of distinct character classes present (0-4).
    pub fn class_count(&self) -> u32 {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .iter()
            .filter(|&&present| present)
            .count() as u32
    }

    /// Assumed keyspace per character position: the sum of the cardinalities
    /// of the classes present (lower 26, upper 26, digits 10, symbols 32).
    ///
    /// Zero only for an empty password or one made entirely of characters
    /// outside the four classes.
    pub fn alphabet_size(&self) -> u32 {
        let mut size = 0;
        if self.has_lower {
            size += 26;
        }
        if self.has_upper {
            size += 26;
        }
        if self.has_digit {
            size += 10;
        }
        if self.has_symbol {
            size += 32;
        }
        size
    }
}

/// Complete strength assessment for one password.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Final score, clamped to 0-100.
    pub score: u8,
    /// Qualitative tier derived from `score`.
    pub tier: Tier,
    /// Theoretical keyspace entropy in bits. Raw upper bound: detected
    /// patterns are penalized in `score`, never deducted here.
    pub entropy_bits: f64,
    /// Human-readable estimated time to brute-force the keyspace.
    pub crack_time: String,
    /// Keyspace per character position, per the detected classes.
    pub alphabet_size: u32,
    /// Distinct characters as a rounded percentage of length.
    pub uniqueness_percent: u8,
    /// Diagnostics in the order the checks ran.
    pub findings: Vec<Finding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::Weak);
        assert_eq!(Tier::from_score(29), Tier::Weak);
        assert_eq!(Tier::from_score(30), Tier::Medium);
        assert_eq!(Tier::from_score(54), Tier::Medium);
        assert_eq!(Tier::from_score(55), Tier::Strong);
        assert_eq!(Tier::from_score(74), Tier::Strong);
        assert_eq!(Tier::from_score(75), Tier::VeryStrong);
        assert_eq!(Tier::from_score(100), Tier::VeryStrong);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::VeryStrong.to_string(), "very-strong");
        assert_eq!(Tier::Weak.to_string(), "weak");
    }

    #[test]
    fn test_alphabet_size_sums_present_classes() {
        let profile = CharsetProfile {
            has_lower: true,
            has_digit: true,
            ..Default::default()
        };
        assert_eq!(profile.alphabet_size(), 36);
        assert_eq!(profile.class_count(), 2);
    }

    #[test]
    fn test_alphabet_size_all_classes() {
        let profile = CharsetProfile {
            has_lower: true,
            has_upper: true,
            has_digit: true,
            has_symbol: true,
        };
        assert_eq!(profile.alphabet_size(), 94);
        assert_eq!(profile.class_count(), 4);
    }

    #[test]
    fn test_alphabet_size_empty_profile() {
        assert_eq!(CharsetProfile::default().alphabet_size(), 0);
    }
}
