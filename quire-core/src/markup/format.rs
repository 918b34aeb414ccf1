//! Formatting commands applied directly to markup text
//!
//! Offsets are counted in characters (Unicode scalar values), not bytes,
//! so positions reported by a text widget can be passed through unchanged.

use super::{any_block_prefix, block_prefix, InlineStyle};
use crate::types::BlockKind;

/// Toggle an inline style over the selection `[start, end)`.
///
/// A selection that is exactly `marker + inner + marker` is unwrapped to
/// `inner`; anything else is wrapped in the marker. An empty selection
/// inserts an empty marker pair, so callers should skip that case.
/// Out-of-range offsets are clamped and reversed bounds are swapped.
pub fn toggle_inline_style(text: &str, start: usize, end: usize, style: InlineStyle) -> String {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = byte_offset(text, start);
    let end = byte_offset(text, end);

    let selection = &text[start..end];
    let replacement = match style.unwrap_text(selection) {
        Some(inner) => inner.to_string(),
        None => style.wrap(selection),
    };

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(&replacement);
    out.push_str(&text[end..]);
    out
}

/// Change the block kind of the line containing `cursor`.
///
/// One existing prefix is stripped from that line before the prefix for
/// `kind` is added; `Paragraph` leaves the line bare. A cursor past the end
/// of the text returns the text unchanged.
pub fn apply_block_prefix(text: &str, cursor: usize, kind: BlockKind) -> String {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    let Some(index) = line_at(&lines, cursor) else {
        return text.to_string();
    };

    let body = any_block_prefix().replace(&lines[index], "").into_owned();
    lines[index] = format!("{}{}", block_prefix(kind), body);

    lines.join("\n")
}

/// Index of the line containing the character offset `cursor`.
///
/// A cursor sitting at the end of a line belongs to that line.
fn line_at(lines: &[String], cursor: usize) -> Option<usize> {
    let mut line_start = 0;
    for (index, line) in lines.iter().enumerate() {
        let line_end = line_start + line.chars().count();
        if cursor <= line_end {
            return Some(index);
        }
        // skip the '\n' removed by split
        line_start = line_end + 1;
    }
    None
}

/// Byte index of a character offset, clamped to the end of `text`
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}
