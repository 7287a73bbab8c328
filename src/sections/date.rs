//! Date pattern check - years and date-like tokens.

use crate::types::Finding;

/// Deduction when a date pattern is found.
pub const DATE_PENALTY: i64 = 10;

/// Fires on a four-digit year in 1900-2099 or a `d/m/yy`-style token with
/// `/`, `-` or `.` separators.
pub fn date_section(password: &str) -> Option<Finding> {
    let chars: Vec<char> = password.chars().collect();
    if has_year(&chars) || has_date_token(&chars) {
        return Some(Finding::warning(
            "Appears to contain date patterns. Avoid using birthdays or years.",
        ));
    }
    None
}

/// Four consecutive digits starting "19" or "20".
fn has_year(chars: &[char]) -> bool {
    chars.windows(4).any(|w| {
        ((w[0] == '1' && w[1] == '9') || (w[0] == '2' && w[1] == '0'))
            && w[2].is_ascii_digit()
            && w[3].is_ascii_digit()
    })
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '-' | '.')
}

/// One or two digits, a separator, one or two digits, a separator, then at
/// least two more digits. The two separators may differ.
fn has_date_token(chars: &[char]) -> bool {
    let n = chars.len();
    for start in 0..n {
        for day_len in 1..=2usize {
            if start + day_len >= n
                || !chars[start..start + day_len].iter().all(char::is_ascii_digit)
            {
                break;
            }
            if !is_separator(chars[start + day_len]) {
                continue;
            }
            let month = start + day_len + 1;
            for month_len in 1..=2usize {
                if month + month_len >= n
                    || !chars[month..month + month_len].iter().all(char::is_ascii_digit)
                {
                    break;
                }
                if !is_separator(chars[month + month_len]) {
                    continue;
                }
                let year = month + month_len + 1;
                if year + 1 < n && chars[year].is_ascii_digit() && chars[year + 1].is_ascii_digit()
                {
                    return true;
                }
            }
        }
    }
    false
}
