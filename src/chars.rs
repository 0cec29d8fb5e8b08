//!
//! Char-offset helpers for plain strings.
//!

use crate::upos_type;

/// Length in chars.
#[inline]
pub(crate) fn len(s: &str) -> upos_type {
    s.chars().count() as upos_type
}

/// Byte offset of the char position. Positions beyond the end map to
/// the end of the string.
pub(crate) fn byte_pos(s: &str, pos: upos_type) -> usize {
    s.char_indices()
        .nth(pos as usize)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

/// Copy of the string without the char at pos.
pub(crate) fn remove_at(s: &str, pos: upos_type) -> String {
    s.chars()
        .enumerate()
        .filter(|(i, _)| *i != pos as usize)
        .map(|(_, c)| c)
        .collect()
}

/// Copy of the string with `ins` inserted at pos.
pub(crate) fn insert_at(s: &str, pos: upos_type, ins: &str) -> String {
    let split = byte_pos(s, pos);
    let mut out = String::with_capacity(s.len() + ins.len());
    out.push_str(&s[..split]);
    out.push_str(ins);
    out.push_str(&s[split..]);
    out
}
