use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::decoder::{LhexDecoder, Word};
use crate::digits::DELIMITER;
use crate::error::DecodeError;
use crate::render::{format_halfword_hex, format_word_hex, format_word_text};
use crate::word::parse_word;

/// Raw lines in one block: header, eight instruction lines, footer.
pub const BLOCK_LINES: usize = 10;
pub const INSTRUCTION_LINES: usize = 8;

/// Character range of the header line that carries the location.
const LOCATION_CHARS: std::ops::Range<usize> = 4..8;
/// Leading characters of the footer line that carry the footer word.
const FOOTER_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub location: u16,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LOCATION {}", format_halfword_hex(self.location))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub word: u32,
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FOOTER {} ({})",
            format_word_hex(self.word),
            format_word_text(self.word)
        )
    }
}

/// A fully decoded block. `Display` renders the listing layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedBlock {
    pub header: Header,
    pub lines: Vec<Vec<Word>>,
    pub footer: Footer,
}

impl LhexDecoder {
    /// Decode every token of a delimited line.
    ///
    /// The segment after the final delimiter is dropped; in well formed input
    /// it is empty. Token count is not checked here. Digit error positions
    /// count characters from the start of the line.
    pub fn decode_line(&self, line: &str) -> Result<Vec<Word>, DecodeError> {
        let mut segments: Vec<&str> = line.split(DELIMITER).collect();
        if let Some(tail) = segments.pop() {
            if !tail.is_empty() {
                warn!(tail, "line does not end with a delimiter; dropping trailing text");
            }
        }
        trace!(tokens = segments.len(), "decoding line");
        let mut offset = 0;
        let mut words = Vec::with_capacity(segments.len());
        for t in segments {
            words.push(self.decode_word(t).map_err(|e| e.shifted(offset))?);
            offset += t.chars().count() + 1;
        }
        Ok(words)
    }

    pub fn decode_header(&self, line: &str) -> Result<Header, DecodeError> {
        let digits: String = line
            .chars()
            .skip(LOCATION_CHARS.start)
            .take(LOCATION_CHARS.len())
            .collect();
        let location = parse_word::<u16>(&self.alphabet, &digits)
            .map_err(|e| e.shifted(LOCATION_CHARS.start))?;
        Ok(Header { location })
    }

    pub fn decode_footer(&self, line: &str) -> Result<Footer, DecodeError> {
        let digits: String = line.chars().take(FOOTER_CHARS).collect();
        let word = parse_word::<u32>(&self.alphabet, &digits)?;
        Ok(Footer { word })
    }

    /// Decode the first [`BLOCK_LINES`] lines of `raw`; any further lines are ignored.
    ///
    /// Digit errors come back wrapped in [`DecodeError::AtLine`].
    pub fn decode_block<S: AsRef<str>>(&self, raw: &[S]) -> Result<DecodedBlock, DecodeError> {
        if raw.len() < BLOCK_LINES {
            return Err(DecodeError::MalformedBlock { lines: raw.len() });
        }
        let header = self.decode_header(raw[0].as_ref()).map_err(|e| e.at_line(0))?;
        let lines = raw[1..=INSTRUCTION_LINES]
            .iter()
            .enumerate()
            .map(|(i, l)| self.decode_line(l.as_ref()).map_err(|e| e.at_line(i + 1)))
            .collect::<Result<Vec<_>, _>>()?;
        let footer = self
            .decode_footer(raw[BLOCK_LINES - 1].as_ref())
            .map_err(|e| e.at_line(BLOCK_LINES - 1))?;
        debug!(location = header.location, footer = footer.word, "decoded block");
        Ok(DecodedBlock { header, lines, footer })
    }
}
