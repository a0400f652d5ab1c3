//! Text-to-cell encoding
//!
//! Converts an ASCII string into a sequence of cell patterns, inserting
//! the number-sign and capital-sign prefix cells and reporting truncation
//! and unmapped input instead of swallowing them.

use heapless::Vec;

use super::patterns::{pattern_for, BLANK, CAPITAL_SIGN, NUMBER_SIGN};
use crate::config::MAX_CELLS;

/// Maximum unmapped characters recorded per encoding pass
pub const MAX_UNMAPPED: usize = 8;

/// A character that had no braille mapping and was rendered blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnmappedChar {
    /// Character index in the input string
    pub position: u16,
    /// The offending character
    pub ch: char,
}

/// Observable outcome of an encoding pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodeStatus {
    /// Input did not fit the available cells and was cut short
    pub truncated: bool,
    /// Characters rendered blank for lack of a mapping (bounded list)
    pub unmapped: Vec<UnmappedChar, MAX_UNMAPPED>,
}

impl EncodeStatus {
    /// Encoding consumed the whole input and every character was mapped
    pub fn is_clean(&self) -> bool {
        !self.truncated && self.unmapped.is_empty()
    }
}

/// Result of encoding a string
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodedText {
    /// Cell patterns in display order
    pub cells: Vec<u8, MAX_CELLS>,
    /// Truncation / unmapped-character report
    pub status: EncodeStatus,
}

/// Encode a string into cell patterns
///
/// Single pass, left to right. A run of digits is prefixed by one
/// NUMBER-SIGN cell; every uppercase letter is prefixed by its own
/// CAPITAL-SIGN cell. Lowercase letters, digits, space and punctuation
/// clear number mode. Emission is atomic per unit: a sign-plus-character
/// pair that does not fit the remaining capacity is not started, and
/// encoding stops there with `status.truncated` set. No wraparound.
pub fn encode_text(text: &str, capacity: usize) -> EncodedText {
    let capacity = capacity.min(MAX_CELLS);
    let mut cells: Vec<u8, MAX_CELLS> = Vec::new();
    let mut status = EncodeStatus::default();
    let mut number_mode = false;

    for (position, c) in text.chars().enumerate() {
        let (prefix, pattern) = match c {
            '0'..='9' => {
                let prefix = if number_mode { None } else { Some(NUMBER_SIGN) };
                number_mode = true;
                // Digits always map
                (prefix, pattern_for(c).unwrap_or(BLANK))
            }
            'A'..='Z' => {
                number_mode = false;
                (Some(CAPITAL_SIGN), pattern_for(c).unwrap_or(BLANK))
            }
            _ => {
                number_mode = false;
                match pattern_for(c) {
                    Some(pattern) => (None, pattern),
                    None => {
                        let _ = status.unmapped.push(UnmappedChar {
                            position: position as u16,
                            ch: c,
                        });
                        (None, BLANK)
                    }
                }
            }
        };

        let needed = 1 + prefix.is_some() as usize;
        if cells.len() + needed > capacity {
            status.truncated = true;
            break;
        }
        if let Some(sign) = prefix {
            let _ = cells.push(sign);
        }
        let _ = cells.push(pattern);
    }

    EncodedText { cells, status }
}
