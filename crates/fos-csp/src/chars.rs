//! Value Characters
//!
//! Which code points may appear inside a directive value token.

/// Check a single character of a directive value
///
/// Accepts HTAB and printable ASCII except `,` (0x2C) and `;` (0x3B).
pub fn is_valid_value_char(c: char) -> bool {
    matches!(c, '\u{09}' | '\u{20}'..='\u{2B}' | '\u{2D}'..='\u{3A}' | '\u{3C}'..='\u{7E}')
}

/// Check every character of a directive value token
pub fn is_valid_value(token: &str) -> bool {
    token.chars().all(is_valid_value_char)
}
