//! The lhex digit alphabet: sixteen characters standing in for the hex digits.

use std::fmt;

use crate::error::{AlphabetError, DecodeError};

/// Separates tokens within a line.
pub const DELIMITER: char = '\'';

/// A 16-character digit table. Position `i` is the character for value `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: [char; 16],
}

impl Alphabet {
    /// `f` = 11, `j` = 12.
    pub const STANDARD: Alphabet = Alphabet::from_chars([
        '0', 'l', '2', '3', '4', '5', '6', '7', '8', '9', 'd', 'f', 'j', 'k', 'q', 'w',
    ]);

    /// Older table with values 11 and 12 swapped: `j` = 11, `f` = 12.
    pub const REVISED: Alphabet = Alphabet::from_chars([
        '0', 'l', '2', '3', '4', '5', '6', '7', '8', '9', 'd', 'j', 'f', 'k', 'q', 'w',
    ]);

    const fn from_chars(chars: [char; 16]) -> Self {
        Self { chars }
    }

    /// Build a custom alphabet from exactly 16 distinct characters.
    pub fn new(table: &str) -> Result<Self, AlphabetError> {
        let v: Vec<char> = table.chars().collect();
        let chars: [char; 16] = v
            .as_slice()
            .try_into()
            .map_err(|_| AlphabetError::WrongLength(v.len()))?;
        if chars.contains(&DELIMITER) {
            return Err(AlphabetError::Delimiter);
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(AlphabetError::Duplicate(*c));
            }
        }
        Ok(Self { chars })
    }

    /// Value of a single digit. No case folding.
    pub fn digit_value(&self, c: char) -> Option<u8> {
        self.chars.iter().position(|&d| d == c).map(|i| i as u8)
    }

    /// Like [`Alphabet::digit_value`] but reports the failing position.
    pub fn require(&self, c: char, position: usize) -> Result<u8, DecodeError> {
        self.digit_value(c)
            .ok_or(DecodeError::InvalidDigit { digit: c, position })
    }

    /// Character for a 4-bit value; higher bits are ignored.
    pub fn digit_char(&self, value: u8) -> char {
        self.chars[(value & 0xF) as usize]
    }

    /// Render the low `width` nybbles of `value`, most significant first.
    pub fn encode(&self, value: u32, width: usize) -> String {
        (0..width)
            .rev()
            .map(|i| {
                let nybble = if i < 8 { (value >> (i * 4)) & 0xF } else { 0 };
                self.digit_char(nybble as u8)
            })
            .collect()
    }

    pub fn as_chars(&self) -> &[char; 16] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars.iter().collect();
        f.debug_tuple("Alphabet").field(&s).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
