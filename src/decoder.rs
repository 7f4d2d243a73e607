use std::fmt;

use serde::Serialize;

use crate::digits::Alphabet;
use crate::error::DecodeError;
use crate::opcodes::{OpDesc, OpcodeTable};
use crate::render::{format_halfword_hex, format_word_hex};
use crate::word::parse_word;

/// Length of an opcode digit followed by a 4-digit address.
pub const INSTRUCTION_LEN: usize = 5;

/// One decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Word {
    Empty,
    Instruction { opcode: OpDesc, address: u16 },
    Constant { value: u32 },
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Word::Empty => f.write_str("EMPTY"),
            Word::Instruction { opcode, address } => {
                write!(f, "{} {}", opcode.mnemonic, format_halfword_hex(*address))
            }
            Word::Constant { value } => write!(f, "CONSTANT {}", format_word_hex(*value)),
        }
    }
}

/// Decodes lhex tokens, lines and blocks with a chosen alphabet and opcode table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LhexDecoder {
    pub alphabet: Alphabet,
    pub opcodes: OpcodeTable,
}

impl LhexDecoder {
    pub fn new(alphabet: Alphabet, opcodes: OpcodeTable) -> Self {
        Self { alphabet, opcodes }
    }

    pub fn decode_word(&self, token: &str) -> Result<Word, DecodeError> {
        if token.is_empty() {
            return Ok(Word::Empty);
        }
        if let Some((opcode, rest)) = self.split_opcode(token) {
            let address = parse_word::<u16>(&self.alphabet, rest).map_err(|e| e.shifted(1))?;
            return Ok(Word::Instruction { opcode, address });
        }
        let value = parse_word::<u32>(&self.alphabet, token)?;
        Ok(Word::Constant { value })
    }

    fn split_opcode<'t>(&self, token: &'t str) -> Option<(OpDesc, &'t str)> {
        if token.chars().count() != INSTRUCTION_LEN {
            return None;
        }
        let mut chars = token.chars();
        let lead = chars.next()?;
        let opcode = self.opcodes.lookup(self.alphabet.digit_value(lead)?)?;
        Some((opcode, chars.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::TABLE;

    #[test]
    fn classifies_tokens() {
        let dec = LhexDecoder::default();
        assert_eq!(dec.decode_word("").unwrap(), Word::Empty);
        assert_eq!(
            dec.decode_word("k2w8j").unwrap(),
            Word::Instruction { opcode: TABLE[0xD], address: 0x2F8C }
        );
        assert_eq!(dec.decode_word("22l6w45q").unwrap(), Word::Constant { value: 0x2216_F45E });
        assert_eq!(dec.decode_word("2k00").unwrap(), Word::Constant { value: 0x2D00 });
    }

    #[test]
    fn renders_tokens() {
        let dec = LhexDecoder::default();
        assert_eq!(dec.decode_word("").unwrap().to_string(), "EMPTY");
        assert_eq!(dec.decode_word("k2w8j").unwrap().to_string(), "CLER 2F 8C");
        assert_eq!(dec.decode_word("f3lj4").unwrap().to_string(), "JUMP 31 C4");
        assert_eq!(dec.decode_word("63lj4").unwrap().to_string(), "DIV  31 C4");
    }

    #[test]
    fn unmapped_lead_digit_is_constant() {
        let only_jump = OpcodeTable::from_descs(&[OpDesc { value: 0xB, mnemonic: "JUMP" }]);
        let dec = LhexDecoder::new(Alphabet::STANDARD, only_jump);
        assert_eq!(dec.decode_word("f3lj4").unwrap().to_string(), "JUMP 31 C4");
        assert_eq!(
            dec.decode_word("k2w8j").unwrap(),
            Word::Constant { value: 0x000D_2F8C }
        );
        assert_eq!(dec.decode_word("k2w8j").unwrap().to_string(), "CONSTANT 00 0D  2F 8C");
    }

    #[test]
    fn invalid_lead_digit_fails() {
        let dec = LhexDecoder::default();
        assert_eq!(
            dec.decode_word("x2w8j"),
            Err(DecodeError::InvalidDigit { digit: 'x', position: 0 })
        );
        assert_eq!(
            dec.decode_word("k2wxj"),
            Err(DecodeError::InvalidDigit { digit: 'x', position: 3 })
        );
    }

    #[test]
    fn revised_alphabet_moves_opcodes() {
        let dec = LhexDecoder::new(Alphabet::REVISED, OpcodeTable::STANDARD);
        // 'f' is 12 here
        assert_eq!(dec.decode_word("f3lf4").unwrap().to_string(), "JNEG 31 C4");
    }
}
