use serde::Serialize;

use lhex_rs::DecodedBlock;

/// JSON shape of one block: rendered strings alongside the raw values.
#[derive(Debug, Clone, Serialize)]
pub struct BlockOut {
    pub first_line: usize,
    pub location: u16,
    pub header: String,
    pub lines: Vec<Vec<String>>,
    pub footer_word: u32,
    pub footer: String,
}

impl BlockOut {
    pub fn new(first_line: usize, block: &DecodedBlock) -> Self {
        Self {
            first_line,
            location: block.header.location,
            header: block.header.to_string(),
            lines: block
                .lines
                .iter()
                .map(|l| l.iter().map(ToString::to_string).collect())
                .collect(),
            footer_word: block.footer.word,
            footer: block.footer.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockError {
    pub first_line: usize,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub blocks: Vec<BlockOut>,
    pub errors: Vec<BlockError>,
}
