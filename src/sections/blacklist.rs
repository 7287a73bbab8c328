//! Blacklist check - exact match against the loaded common-password list.

use crate::blacklist::is_blacklisted;
use crate::types::Finding;

/// Deduction when the password is on the blacklist.
pub const BLACKLIST_PENALTY: i64 = 20;

/// Fires only when the optional blacklist has been initialized and the
/// whole password matches an entry (case-insensitive).
pub fn blacklist_section(password: &str) -> Option<Finding> {
    if is_blacklisted(password) {
        return Some(Finding::error(
            "Matches an entry in the common-password blacklist. Pick something never used before.",
        ));
    }
    None
}
