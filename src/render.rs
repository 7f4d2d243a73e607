//! Hex and glyph rendering of half-words and words.

/// Glyph for byte value `i` at position `i`.
pub const SYMBOLS: &[u8; 64] = br"?z0 ?b1-?y2+?r3;?i4/?d5.?n6,?m7v'p8o?e9x?uf??tg??hj??ck??aq??sw?";

/// Rendered for any byte past the end of [`SYMBOLS`].
pub const PLACEHOLDER: char = '?';

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub fn format_byte_hex(byte: u8) -> String {
    let mut s = String::with_capacity(2);
    s.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    s.push(HEX_DIGITS[(byte & 0xF) as usize] as char);
    s
}

/// `"BB BB"`, high byte first.
pub fn format_halfword_hex(h: u16) -> String {
    let [hi, lo] = h.to_be_bytes();
    format!("{} {}", format_byte_hex(hi), format_byte_hex(lo))
}

/// `"BB BB  BB BB"`: two half-words separated by two spaces.
pub fn format_word_hex(w: u32) -> String {
    format!(
        "{}  {}",
        format_halfword_hex((w >> 16) as u16),
        format_halfword_hex(w as u16)
    )
}

pub fn glyph(byte: u8) -> char {
    SYMBOLS
        .get(byte as usize)
        .map(|&b| b as char)
        .unwrap_or(PLACEHOLDER)
}

/// Four glyphs, one per byte, most significant first.
pub fn format_word_text(w: u32) -> String {
    w.to_be_bytes().into_iter().map(glyph).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(format_byte_hex(0x2F), "2F");
        assert_eq!(format_byte_hex(0x00), "00");
        assert_eq!(format_halfword_hex(0x31C4), "31 C4");
        assert_eq!(format_word_hex(0x000B_31C4), "00 0B  31 C4");
        assert_eq!(format_word_hex(0x31C4), "00 00  31 C4");
        assert_eq!(format_word_hex(u32::MAX), "FF FF  FF FF");
    }

    #[test]
    fn text_form() {
        assert_eq!(format_word_text(0x000B_31C4), "?+h?");
        assert_eq!(format_word_text(0x2216_F45E), "85??");
    }

    #[test]
    fn glyph_bounds() {
        assert_eq!(glyph(1), 'z');
        assert_eq!(glyph(32), '\'');
        assert_eq!(glyph(62), 'w');
        assert_eq!(glyph(63), '?');
        for b in 64..=255u8 {
            assert_eq!(glyph(b), PLACEHOLDER);
        }
    }
}
