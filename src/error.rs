/// Failures while decoding a token, line or block.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid lhex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
    #[error("malformed block: expected at least 10 lines, got {lines}")]
    MalformedBlock { lines: usize },
    /// `line` counts from 0 (the header) to 9 (the footer).
    #[error("block line {line}: {source}")]
    AtLine { line: usize, #[source] source: Box<DecodeError> },
}

/// Rejected custom alphabets.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must have 16 characters, got {0}")]
    WrongLength(usize),
    #[error("alphabet repeats character {0:?}")]
    Duplicate(char),
    #[error("alphabet may not contain the token delimiter")]
    Delimiter,
}

impl DecodeError {
    /// Re-base an [`DecodeError::InvalidDigit`] position onto the enclosing text.
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            DecodeError::InvalidDigit { digit, position } => {
                DecodeError::InvalidDigit { digit, position: position + by }
            }
            other => other,
        }
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        DecodeError::AtLine { line, source: Box::new(self) }
    }
}
