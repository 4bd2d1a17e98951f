use crate::constants::{segment_code, symbol};

/// Maps a character to its symbol index. Lower-case letters fold to upper-case
/// since a 7-segment digit can't tell them apart.
pub fn symbol_index(c: char) -> Option<u8> {
    let c = c.to_ascii_uppercase();
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + symbol::LETTER_A),
        ' ' => Some(symbol::BLANK),
        '-' => Some(symbol::MINUS),
        '.' => Some(symbol::DECIMAL_POINT),
        '*' | '°' => Some(symbol::DEGREE),
        '_' => Some(symbol::UNDERSCORE),
        _ => None,
    }
}

/// Segment mask for a character, `None` if it can't be displayed.
pub fn char_to_segments(c: char) -> Option<u8> {
    symbol_index(c).map(segment_code)
}

/// Segment mask for a single digit value in base 16 (0-F).
pub(crate) fn digit_to_segments(digit: u8) -> u8 {
    segment_code(digit & 0x0F)
}
