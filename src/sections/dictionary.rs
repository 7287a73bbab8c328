//! Dictionary check - common weak words embedded anywhere in the password.

use crate::types::Finding;

/// Deduction when a dictionary word is found.
pub const DICTIONARY_PENALTY: i64 = 20;

const COMMON_WORDS: [&str; 15] = [
    "password",
    "admin",
    "user",
    "login",
    "welcome",
    "letmein",
    "monkey",
    "dragon",
    "master",
    "sunshine",
    "princess",
    "qwerty",
    "trustno",
    "batman",
    "superman",
];

/// Case-insensitive substring match against the common-word list.
pub fn dictionary_section(password: &str) -> Option<Finding> {
    let lower = password.to_lowercase();
    if COMMON_WORDS.iter().any(|word| lower.contains(word)) {
        return Some(Finding::error(
            "Contains common dictionary words. Avoid using recognizable words.",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_word() {
        assert!(dictionary_section("password").is_some());
    }

    #[test]
    fn test_embedded_word() {
        assert!(dictionary_section("xX_dragon_Xx").is_some());
    }

    #[test]
    fn test_case_insensitive() {
        assert!(dictionary_section("SuPeRmAn42").is_some());
    }

    #[test]
    fn test_single_finding_for_multiple_words() {
        // "password" and "admin" both present, still one finding
        assert!(dictionary_section("adminpassword").is_some());
    }

    #[test]
    fn test_clean_password() {
        assert!(dictionary_section("Tr0ub4dor&3").is_none());
    }
}
