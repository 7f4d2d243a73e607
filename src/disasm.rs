use std::fmt;

use crate::block::DecodedBlock;

/// Listing lines for a block: header, a blank line, then each instruction
/// line's words one per line followed by a blank line, the footer, and two
/// trailing blank lines.
pub fn listing_lines(block: &DecodedBlock) -> Vec<String> {
    let mut out = vec![block.header.to_string(), String::new()];
    for line in &block.lines {
        out.extend(line.iter().map(ToString::to_string));
        out.push(String::new());
    }
    out.push(block.footer.to_string());
    out.push(String::new());
    out.push(String::new());
    out
}

pub fn format_block(block: &DecodedBlock) -> String {
    block.to_string()
}

impl fmt::Display for DecodedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        listing_lines(self).iter().try_for_each(|l| writeln!(f, "{l}"))
    }
}
