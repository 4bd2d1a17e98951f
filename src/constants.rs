pub const MIN_SEGMENTS: usize = 7; // A..G
pub const MAX_SEGMENTS: usize = 8; // A..G, DP
pub const MAX_BRIGHTNESS: u8 = 100; // percent
pub const PWM_PERIOD: u8 = 10; // refresh ticks per duty cycle
pub const MAX_TEXT_PATTERN: usize = 64; // text glyphs plus wrap gap

pub const DP_MASK: u8 = 0x80;

/// Segment masks indexed by symbol, bit 0 = A .. bit 6 = G, bit 7 = DP.
///
/// ```text
///    AAA
///   F   B
///    GGG
///   E   C
///    DDD  DP
/// ```
pub const SEGMENT_CODES: [u8; 41] = [
    // GFEDCBA
    0b0011_1111, // 0  '0'
    0b0000_0110, // 1  '1'
    0b0101_1011, // 2  '2'
    0b0100_1111, // 3  '3'
    0b0110_0110, // 4  '4'
    0b0110_1101, // 5  '5'
    0b0111_1101, // 6  '6'
    0b0000_0111, // 7  '7'
    0b0111_1111, // 8  '8'
    0b0110_1111, // 9  '9'
    0b0111_0111, // 10 'A'
    0b0111_1100, // 11 'b'
    0b0011_1001, // 12 'C'
    0b0101_1110, // 13 'd'
    0b0111_1001, // 14 'E'
    0b0111_0001, // 15 'F'
    0b0011_1101, // 16 'G'
    0b0111_0110, // 17 'H'
    0b0011_0000, // 18 'I'
    0b0000_1110, // 19 'J'
    0b0111_0110, // 20 'K' same as 'H'
    0b0011_1000, // 21 'L'
    0b0000_0000, // 22 'M' not displayable
    0b0101_0100, // 23 'n'
    0b0011_1111, // 24 'O'
    0b0111_0011, // 25 'P'
    0b0110_0111, // 26 'q'
    0b0101_0000, // 27 'r'
    0b0110_1101, // 28 'S'
    0b0111_1000, // 29 't'
    0b0011_1110, // 30 'U'
    0b0011_1110, // 31 'V' same as 'U'
    0b0000_0000, // 32 'W' not displayable
    0b0111_0110, // 33 'X' same as 'H'
    0b0110_1110, // 34 'y'
    0b0101_1011, // 35 'Z' same as '2'
    0b0000_0000, // 36 ' '
    0b0100_0000, // 37 '-'
    0b1000_0000, // 38 '.'
    0b0110_0011, // 39 degree
    0b0000_1000, // 40 '_'
];

pub mod symbol {
    pub const ZERO: u8 = 0;
    pub const LETTER_A: u8 = 10;
    pub const LETTER_C: u8 = 12;
    pub const LETTER_F: u8 = 15;
    pub const BLANK: u8 = 36;
    pub const MINUS: u8 = 37;
    pub const DECIMAL_POINT: u8 = 38;
    pub const DEGREE: u8 = 39;
    pub const UNDERSCORE: u8 = 40;
}

/// Segment mask for a symbol index. Out-of-table indices render blank.
pub const fn segment_code(index: u8) -> u8 {
    if (index as usize) < SEGMENT_CODES.len() {
        SEGMENT_CODES[index as usize]
    } else {
        0
    }
}

pub const BLANK: u8 = segment_code(symbol::BLANK);
pub const MINUS: u8 = segment_code(symbol::MINUS);
pub const DEGREE: u8 = segment_code(symbol::DEGREE);

/// Single-segment masks in sweep order A -> B -> .. -> G -> DP.
pub const SEGMENT_SWEEP: [u8; MAX_SEGMENTS] = [
    0b0000_0001, // A
    0b0000_0010, // B
    0b0000_0100, // C
    0b0000_1000, // D
    0b0001_0000, // E
    0b0010_0000, // F
    0b0100_0000, // G
    0b1000_0000, // DP
];
