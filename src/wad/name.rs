use std::borrow::Borrow;

/// Reads a name from a raw 8-byte, NUL padded byte array.
///
/// Only trailing NULs are stripped. A NUL in the middle of the name is kept, as are any bytes that
/// follow it.
///
/// This function does not check if the name contains only legal ASCII characters. Non-ASCII bytes
/// are treated as Latin-1, where all bytes are valid and map 1-to-1 to the corresponding Unicode
/// codepoints.
pub fn parse_name(raw: &[u8; 8]) -> String {
    let end = raw.iter().rposition(|&ch| ch != b'\0').map_or(0, |last| last + 1);
    raw[..end].iter().copied().map(|b| b as char).collect()
}

/// Reads a lump name from a directory entry. The name ends at the first NUL; anything after it is
/// garbage left behind by some WAD editors.
pub fn parse_lump_name(raw: &[u8; 8]) -> String {
    raw.iter().take_while(|&&b| b != 0).map(|&b| b as char).collect()
}

pub trait NameExt {
    /// Returns `true` if this is a legal lump name consisting only of the letters `A-Z`, digits
    /// `0-9`, and any of the punctuation `[]-_\`.
    fn is_legal_name(&self) -> bool;
}

impl<S: Borrow<str>> NameExt for S {
    /// Returns `true` if this is a legal lump name consisting only of the letters `A-Z`, digits
    /// `0-9`, and any of the punctuation `[]-_\`.
    fn is_legal_name(&self) -> bool {
        let name = self.borrow();

        let good_length = !name.is_empty() && name.len() <= 8;
        let has_illegal_char =
            name.contains(|ch| !matches!(ch, 'A'..='Z' | '0'..='9' | '[' | ']' | '-' | '_' | '\\'));
        good_length && !has_illegal_char
    }
}
