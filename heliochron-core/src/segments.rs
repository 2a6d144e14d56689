//! 7-segment glyph encoding
//!
//! Segment bit assignments follow the board's shift-register wiring, output
//! Q0 through Q7:
//!
//! ```text
//! bit:      7    6   5   4   3   2   1   0
//! segment:  DP   A   B   C   D   E   G   F
//! ```
//!
//! Patterns describe *lit* segments; the display driver inverts them for
//! the common-anode hardware before transmission.

/// Segment patterns for the decimal digits, indexed 0..=9
pub const DIGIT_PATTERNS: [u8; 10] = [
    0b0111_1101, // 0: A B C D E F
    0b0011_0000, // 1: B C
    0b0110_1110, // 2: A B D E G
    0b0111_1010, // 3: A B C D G
    0b0011_0011, // 4: B C F G
    0b0101_1011, // 5: A C D F G
    0b0101_1111, // 6: A C D E F G
    0b0111_0000, // 7: A B C
    0b0111_1111, // 8: A B C D E F G
    0b0111_1011, // 9: A B C D F G
];

/// Middle segment only, the placeholder glyph
pub const DASH: u8 = 0b0000_0010;

/// Decimal point only, OR'd into a digit pattern to flag overflow
pub const DOT: u8 = 0b1000_0000;

/// Look up the segment pattern for a decimal digit
///
/// # Panics
///
/// Panics if `digit` is greater than 9. Out-of-range digits are a caller
/// bug, not a runtime condition.
pub fn encode(digit: u8) -> u8 {
    DIGIT_PATTERNS[usize::from(digit)]
}
