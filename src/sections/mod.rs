//! Scoring sections.
//!
//! Each section examines one aspect of the password. Band sections (length,
//! variety, uniqueness, entropy) always award points and emit exactly one
//! finding; penalty sections (pattern, dictionary, keyboard, date, blacklist)
//! emit findings only when they fire, and each hit carries a fixed deduction.

mod blacklist;
mod date;
mod dictionary;
mod entropy;
mod keyboard;
mod length;
mod pattern;
mod uniqueness;
mod variety;

pub use blacklist::{BLACKLIST_PENALTY, blacklist_section};
pub use date::{DATE_PENALTY, date_section};
pub use dictionary::{DICTIONARY_PENALTY, dictionary_section};
pub use entropy::entropy_section;
pub use keyboard::{KEYBOARD_PENALTY, keyboard_section};
pub use length::{LENGTH_BONUS, LENGTH_BONUS_THRESHOLD, length_section};
pub use pattern::{PATTERN_PENALTY, pattern_analysis_section};
pub use uniqueness::uniqueness_section;
pub use variety::character_variety_section;

use crate::types::Finding;

/// Outcome of a band section: points awarded plus the one finding that
/// describes which bucket the password landed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub points: i64,
    pub finding: Finding,
}
