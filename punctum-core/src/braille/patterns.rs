//! Braille dot patterns
//!
//! A cell is a 6-bit pattern where bit *i* is dot *i + 1*. Dots 1-3 form
//! the left column top to bottom, dots 4-6 the right column.

/// Mask limiting a pattern to the six valid dot bits
pub const PATTERN_MASK: u8 = 0x3F;

/// Blank cell (no dots raised)
pub const BLANK: u8 = 0x00;

/// Capital sign, prefixes a single uppercase letter (dot 6)
pub const CAPITAL_SIGN: u8 = 0x20;

/// Number sign, prefixes a run of digits (dots 3,4,5,6)
pub const NUMBER_SIGN: u8 = 0x3C;

/// Letter patterns for a-z
const ALPHABET: [u8; 26] = [
    0x01, // a: dot 1
    0x03, // b: dots 1,2
    0x09, // c: dots 1,4
    0x19, // d: dots 1,4,5
    0x11, // e: dots 1,5
    0x0B, // f: dots 1,2,4
    0x1B, // g: dots 1,2,4,5
    0x13, // h: dots 1,2,5
    0x0A, // i: dots 2,4
    0x1A, // j: dots 2,4,5
    0x05, // k: dots 1,3
    0x07, // l: dots 1,2,3
    0x0D, // m: dots 1,3,4
    0x1D, // n: dots 1,3,4,5
    0x15, // o: dots 1,3,5
    0x0F, // p: dots 1,2,3,4
    0x1F, // q: dots 1,2,3,4,5
    0x17, // r: dots 1,2,3,5
    0x0E, // s: dots 2,3,4
    0x1E, // t: dots 2,3,4,5
    0x25, // u: dots 1,3,6
    0x27, // v: dots 1,2,3,6
    0x3A, // w: dots 2,4,5,6
    0x2D, // x: dots 1,3,4,6
    0x3D, // y: dots 1,3,4,5,6
    0x35, // z: dots 1,3,5,6
];

/// Digit patterns for 0-9, reusing the shapes of j and a-i
const DIGITS: [u8; 10] = [
    0x1A, // 0 (j)
    0x01, // 1 (a)
    0x03, // 2 (b)
    0x09, // 3 (c)
    0x19, // 4 (d)
    0x11, // 5 (e)
    0x0B, // 6 (f)
    0x1B, // 7 (g)
    0x13, // 8 (h)
    0x0A, // 9 (i)
];

/// Space and punctuation lookup
const PUNCTUATION: [(char, u8); 9] = [
    (' ', BLANK),
    ('!', 0x16),
    ('\'', 0x04),
    ('-', 0x30),
    ('.', 0x32),
    (',', 0x0C),
    ('?', 0x26),
    (';', 0x06),
    (':', 0x12),
];

/// Look up the pattern for a character
///
/// Returns `None` for characters with no braille mapping. Space maps to
/// the blank pattern and is therefore `Some(BLANK)`, not `None`.
pub fn pattern_for(c: char) -> Option<u8> {
    match c {
        'a'..='z' => Some(ALPHABET[(c as u8 - b'a') as usize]),
        'A'..='Z' => Some(ALPHABET[(c as u8 - b'A') as usize]),
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
        _ => PUNCTUATION
            .iter()
            .find(|&&(p, _)| p == c)
            .map(|&(_, pattern)| pattern),
    }
}

/// Convert a character to its dot pattern
///
/// Unmapped characters yield the blank pattern, never an error. Digits map
/// to their bare shapes; the number-sign prefix is applied by
/// [`text::encode_text`](super::text::encode_text).
pub fn char_to_pattern(c: char) -> u8 {
    pattern_for(c).unwrap_or(BLANK)
}

/// Mirror a pattern left-to-right
///
/// Swaps the dot pairs (1,4), (2,5) and (3,6), rendering the pattern as it
/// would feel approached from the opposite face of the cell. Used for
/// slate-writing practice, where cells are punched mirrored. The mapping
/// is an involution: `mirror(mirror(p)) == p`.
pub fn mirror(pattern: u8) -> u8 {
    let p = pattern & PATTERN_MASK;
    ((p & 0x07) << 3) | (p >> 3)
}

/// Iterate the raised dot numbers (1..=6) of a pattern
///
/// Diagnostic helper for labeling patterns in logs and tests.
pub fn dot_numbers(pattern: u8) -> impl Iterator<Item = u8> {
    let p = pattern & PATTERN_MASK;
    (1..=6u8).filter(move |dot| p & (1 << (dot - 1)) != 0)
}
