//! Crack-time projection from theoretical entropy.

/// Assumed attacker rate: 10 billion guesses per second.
const GUESSES_PER_SECOND: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0; // 30 days
const YEAR: f64 = 31_536_000.0; // 365 days
const CENTURY: f64 = 3_153_600_000.0;

/// Expected seconds to crack a keyspace of `2^entropy_bits` combinations.
///
/// The divide-by-2 models the average case of an exhaustive search.
pub(crate) fn crack_seconds(entropy_bits: f64) -> f64 {
    let combinations = 2f64.powf(entropy_bits);
    combinations / (2.0 * GUESSES_PER_SECOND)
}

/// Converts entropy into a human-readable time-to-crack label.
///
/// Rounds to the nearest whole unit at every threshold; beyond a hundred
/// years the label switches to scientific notation with two fractional
/// digits.
pub fn crack_time_label(entropy_bits: f64) -> String {
    let seconds = crack_seconds(entropy_bits);

    if seconds < 1.0 {
        return "Instant".to_string();
    }
    if seconds < MINUTE {
        return format!("{} seconds", seconds.round() as u64);
    }
    if seconds < HOUR {
        return format!("{} minutes", (seconds / MINUTE).round() as u64);
    }
    if seconds < DAY {
        return format!("{} hours", (seconds / HOUR).round() as u64);
    }
    if seconds < MONTH {
        return format!("{} days", (seconds / DAY).round() as u64);
    }
    if seconds < YEAR {
        return format!("{} months", (seconds / MONTH).round() as u64);
    }
    if seconds < CENTURY {
        return format!("{} years", (seconds / YEAR).round() as u64);
    }
    format!("{:.2e} years", seconds / YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_entropy_is_instant() {
        assert_eq!(crack_time_label(0.0), "Instant");
        assert_eq!(crack_time_label(30.0), "Instant");
    }

    #[test]
    fn test_seconds_label() {
        // 2^40 / 2e10 = 54.98 seconds
        assert_eq!(crack_time_label(40.0), "55 seconds");
    }

    #[test]
    fn test_minutes_label() {
        // 2^43 / 2e10 = 439.8 seconds
        assert_eq!(crack_time_label(43.0), "7 minutes");
    }

    #[test]
    fn test_hours_label() {
        // 2^47 / 2e10 = 7036.9 seconds
        assert_eq!(crack_time_label(47.0), "2 hours");
    }

    #[test]
    fn test_days_label() {
        // 2^55 / 2e10 = 1_801_439.9 seconds
        assert_eq!(crack_time_label(55.0), "21 days");
    }

    #[test]
    fn test_months_label() {
        // 2^59 / 2e10 = 28_823_037.6 seconds
        assert_eq!(crack_time_label(59.0), "11 months");
    }

    #[test]
    fn test_years_label() {
        // 2^65 / 2e10 = 1.84e9 seconds, below the hundred-year cutoff
        assert_eq!(crack_time_label(65.0), "58 years");
    }

    #[test]
    fn test_scientific_notation_past_a_century() {
        // 2^80 / 2e10 = 6.04e13 seconds = 1.92 million years
        assert_eq!(crack_time_label(80.0), "1.92e6 years");
    }

    #[test]
    fn test_crack_seconds_monotonic_in_entropy() {
        let entropies = [28.0, 35.0, 50.0, 64.0, 90.0, 128.0];
        for pair in entropies.windows(2) {
            assert!(crack_seconds(pair[0]) < crack_seconds(pair[1]));
        }
    }
}
