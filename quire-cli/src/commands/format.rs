//! Format and block command implementations

use anyhow::Result;
use quire_core::markup::{apply_block_prefix, toggle_inline_style};
use quire_core::{BlockKind, InlineStyle};

/// Toggle an inline style over `[start, end)`
pub fn format(input: &str, style: InlineStyle, start: usize, end: usize, in_place: bool) -> Result<()> {
    let text = super::read_input(input)?;

    let formatted = if start == end {
        tracing::warn!("Empty selection at {}, nothing to format", start);
        text
    } else {
        toggle_inline_style(&text, start, end, style)
    };

    super::emit(&formatted, input, in_place)
}

/// Change the block kind of the line containing `cursor`
pub fn block(input: &str, kind: BlockKind, cursor: usize, in_place: bool) -> Result<()> {
    let text = super::read_input(input)?;

    if cursor > text.chars().count() {
        tracing::warn!("Cursor {} is past the end of {}", cursor, input);
    }
    let formatted = apply_block_prefix(&text, cursor, kind);

    super::emit(&formatted, input, in_place)
}
