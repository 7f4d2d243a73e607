//! Splits a text stream into raw 10-line blocks.
//!
//! Files open with a title line that carries no block data, so by default the
//! first line is skipped. After that, blank lines are ignored and every ten
//! non-blank lines form one block. A trailing group of fewer than ten lines is
//! dropped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::block::BLOCK_LINES;

/// Preamble lines skipped when nothing else is asked for.
pub const DEFAULT_SKIP: usize = 1;

/// The raw, trimmed lines of one block plus the 1-based line number it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub first_line: usize,
    pub lines: Vec<String>,
}

pub struct BlockSource<R> {
    lines: std::io::Lines<R>,
    skip: usize,
    line_no: usize,
}

impl<R: BufRead> BlockSource<R> {
    pub fn new(reader: R, skip: usize) -> Self {
        Self { lines: reader.lines(), skip, line_no: 0 }
    }

    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        let l = self.lines.next()?;
        self.line_no += 1;
        Some(l)
    }
}

impl<R: BufRead> Iterator for BlockSource<R> {
    type Item = Result<RawBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.skip > 0 {
            self.skip -= 1;
            match self.next_line()? {
                Ok(_) => {}
                Err(e) => return Some(Err(e).context("reading preamble")),
            }
        }

        let mut lines = Vec::with_capacity(BLOCK_LINES);
        let mut first_line = 0;
        while lines.len() < BLOCK_LINES {
            let line = match self.next_line() {
                Some(Ok(l)) => l,
                Some(Err(e)) => {
                    return Some(Err(e).with_context(|| format!("reading line {}", self.line_no)))
                }
                None => {
                    if !lines.is_empty() {
                        warn!(
                            first_line,
                            lines = lines.len(),
                            "input ended mid-block; dropping short trailing group"
                        );
                    }
                    return None;
                }
            };
            let line = line.trim_end();
            if line.trim_start().is_empty() {
                continue;
            }
            if lines.is_empty() {
                first_line = self.line_no;
            }
            lines.push(line.to_string());
        }
        debug!(first_line, "read raw block");
        Some(Ok(RawBlock { first_line, lines }))
    }
}

/// Read every complete block of a file.
pub fn load_blocks(path: &Path, skip: usize) -> Result<Vec<RawBlock>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    BlockSource::new(BufReader::new(file), skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn numbered(n: usize) -> String {
        (0..n).map(|i| format!("l{i}  \n")).collect()
    }

    #[test]
    fn chunks_into_tens() {
        let text = format!("title\n{}", numbered(20));
        let blocks: Vec<_> = BlockSource::new(Cursor::new(text), 1)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].first_line, 2);
        assert_eq!(blocks[0].lines[0], "l0");
        assert_eq!(blocks[1].lines[9], "l19");
        assert_eq!(blocks[1].first_line, 12);
    }

    #[test]
    fn short_tail_is_dropped() {
        let text = format!("title\n{}", numbered(14));
        let blocks: Vec<_> = BlockSource::new(Cursor::new(text), 1)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut text = String::from("\n\n");
        for i in 0..10 {
            text.push_str(&format!("x{i}\n   \n"));
        }
        let blocks: Vec<_> = BlockSource::new(Cursor::new(text), 0)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].first_line, 3);
        assert_eq!(blocks[0].lines.len(), 10);
        assert!(blocks[0].lines.iter().all(|l| l.starts_with('x')));
    }

    #[test]
    fn empty_input() {
        assert_eq!(BlockSource::new(Cursor::new(""), DEFAULT_SKIP).count(), 0);
    }

    #[test]
    fn load_blocks_reads_file() {
        let path = std::env::temp_dir().join("_lhex_source_test.tx");
        std::fs::write(&path, format!("title\n{}", numbered(10))).unwrap();
        let blocks = load_blocks(&path, DEFAULT_SKIP).unwrap();
        assert_eq!(blocks.len(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_errors() {
        let err = load_blocks(Path::new("/nonexistent/lhex.tx"), 0).unwrap_err();
        assert!(err.to_string().contains("opening"));
    }
}
