//! Braille text encoder
//!
//! Maps ASCII characters and strings to 6-bit dot patterns, applying the
//! capital-sign and number-sign prefix conventions of uncontracted
//! (grade 1) braille.

pub mod patterns;
pub mod text;

pub use patterns::{
    char_to_pattern, dot_numbers, mirror, pattern_for, BLANK, CAPITAL_SIGN, NUMBER_SIGN,
    PATTERN_MASK,
};
pub use text::{encode_text, EncodeStatus, EncodedText, UnmappedChar, MAX_UNMAPPED};
