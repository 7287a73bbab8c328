//! Pattern analysis - sequential runs, repeated blocks, repeated characters.

use crate::types::Finding;

/// Deduction per detected pattern category.
pub const PATTERN_PENALTY: i64 = 15;

/// Ascending and descending 4-grams over the digit sequence.
const NUMBER_SEQUENCES: [&str; 14] = [
    "0123", "1234", "2345", "3456", "4567", "5678", "6789", "9876", "8765", "7654", "6543",
    "5432", "4321", "3210",
];

/// Ascending and descending 4-grams over the letters a-j. Coverage stops at
/// 'j', so runs like "wxyz" are not flagged.
const LETTER_SEQUENCES: [&str; 10] = [
    "abcd", "bcde", "cdef", "defg", "efgh", "fghi", "ghij", "dcba", "edcb", "fedc",
];

/// Scans for predictable structure. Each of the four categories fires at
/// most once, independent of how many occurrences exist; the evaluator
/// subtracts [`PATTERN_PENALTY`] per returned finding.
///
/// Sequence checks run on the lowercase-folded password; the repetition
/// checks are case-sensitive.
pub fn pattern_analysis_section(password: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let lower = password.to_lowercase();

    if NUMBER_SEQUENCES.iter().any(|seq| lower.contains(seq)) {
        findings.push(Finding::error(
            "Contains sequential numbers (e.g., 123, 456). Avoid predictable sequences.",
        ));
    }

    if LETTER_SEQUENCES.iter().any(|seq| lower.contains(seq)) {
        findings.push(Finding::error(
            "Contains sequential letters (e.g., abc, xyz). Use random character combinations.",
        ));
    }

    if has_repeated_block(password) {
        findings.push(Finding::error(
            "Contains repeated patterns (e.g., 123123, abcabc). Avoid repetition.",
        ));
    }

    if has_repeated_char(password) {
        findings.push(Finding::error(
            "Contains repeated characters (e.g., aaaa, 1111). Avoid using same character multiple times.",
        ));
    }

    findings
}

/// True if some contiguous block of length >= 2 appears at least three
/// times back-to-back.
fn has_repeated_block(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();
    for block_len in 2..=n / 3 {
        for start in 0..=n - 3 * block_len {
            let block = &chars[start..start + block_len];
            if chars[start + block_len..start + 2 * block_len] == *block
                && chars[start + 2 * block_len..start + 3 * block_len] == *block
            {
                return true;
            }
        }
    }
    false
}

/// True if any single character repeats four or more times in a row.
fn has_repeated_char(password: &str) -> bool {
    let mut run = 0;
    let mut prev = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 4 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_numbers() {
        let findings = pattern_analysis_section("pass1234word");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("sequential numbers"));
    }

    #[test]
    fn test_descending_numbers() {
        assert_eq!(pattern_analysis_section("x9876x").len(), 1);
    }

    #[test]
    fn test_three_digit_run_is_not_enough() {
        // "123" alone never matches the 4-gram tables
        assert!(pattern_analysis_section("password123").is_empty());
    }

    #[test]
    fn test_sequential_letters_fold_case() {
        let findings = pattern_analysis_section("xxABCDxx");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("sequential letters"));
    }

    #[test]
    fn test_letter_table_stops_at_j() {
        assert!(pattern_analysis_section("wxyz").is_empty());
        assert!(pattern_analysis_section("mnop").is_empty());
    }

    #[test]
    fn test_repeated_block() {
        let findings = pattern_analysis_section("abcabcabc");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("repeated patterns"));
    }

    #[test]
    fn test_two_block_repetitions_do_not_fire() {
        assert!(pattern_analysis_section("abcabc").is_empty());
    }

    #[test]
    fn test_repeated_block_is_case_sensitive() {
        assert!(pattern_analysis_section("AbcAbcAbc").len() == 1);
        assert!(pattern_analysis_section("abcAbcABc").is_empty());
    }

    #[test]
    fn test_repeated_character() {
        let findings = pattern_analysis_section("xaaaax");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("repeated characters"));
    }

    #[test]
    fn test_three_repeats_do_not_fire() {
        assert!(pattern_analysis_section("xaaax").is_empty());
    }

    #[test]
    fn test_repeated_character_is_case_sensitive() {
        // Runs of three 'a' and three 'b' broken by case never reach four
        assert!(pattern_analysis_section("AaaaBbbb").is_empty());
    }

    #[test]
    fn test_one_finding_per_category() {
        // Two distinct numeric runs still produce a single finding
        let findings = pattern_analysis_section("1234x6789");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_multiple_categories_accumulate() {
        // Sequential numbers + repeated character
        let findings = pattern_analysis_section("1234aaaa");
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_clean_password() {
        assert!(pattern_analysis_section("Tr0ub4dor&3xyz99").is_empty());
    }
}
