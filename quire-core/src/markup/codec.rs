//! Conversion between a [`Document`] and its markup text
//!
//! [`decode`] renders a stored document as editable markup; [`encode`]
//! re-parses edited markup into a document. Both are total: any input
//! produces some output, and unrecognized markup degrades to paragraphs.

use super::{any_marker, block_prefix, numbered_prefix, InlineStyle, BLOCK_SEPARATOR};
use crate::types::{Block, BlockKind, Document, ImageBlock, Run, TextBlock, TextStyle};

/// Placeholder shown for images without alt text
const NO_DESCRIPTION: &str = "No description";

/// Markup for a divider line. The `---\n` prefix is used when a divider is
/// inserted above existing text; a decoded divider stands alone.
const DIVIDER_LINE: &str = "---";

/// Render a document as markup, one line per block separated by blank lines
pub fn decode(document: &Document) -> String {
    document
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Parse markup into a document
pub fn encode(markup: &str) -> Document {
    markup
        .split(BLOCK_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_block)
        .collect()
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Image(image) => render_image(image),
        Block::Text(text) => render_text(text),
    }
}

fn render_image(image: &ImageBlock) -> String {
    let alt = image
        .alt
        .as_deref()
        .filter(|alt| !alt.is_empty())
        .unwrap_or(NO_DESCRIPTION);
    format!("[Image: {alt}]")
}

fn render_text(block: &TextBlock) -> String {
    if block.kind == BlockKind::Divider {
        return DIVIDER_LINE.to_string();
    }

    let mut line = block_prefix(block.kind).to_string();
    for run in &block.runs {
        line.push_str(&render_run(run));
    }
    line
}

fn render_run(run: &Run) -> String {
    InlineStyle::ALL
        .into_iter()
        .filter(|style| style.is_set(&run.style))
        .fold(run.text.clone(), |text, style| style.wrap(&text))
}

fn parse_block(segment: &str) -> Block {
    let (kind, body) = classify(segment);
    Block::Text(TextBlock::with_runs(kind, vec![parse_run(body)]))
}

/// Block kind of a segment and the text left after its prefix.
///
/// Prefixes are tested in a fixed order and the first match wins.
fn classify(segment: &str) -> (BlockKind, &str) {
    const LITERAL: [(&str, BlockKind); 4] = [
        ("# ", BlockKind::Heading1),
        ("## ", BlockKind::Heading2),
        ("### ", BlockKind::Heading3),
        ("- ", BlockKind::ListItem),
    ];

    for (prefix, kind) in LITERAL {
        if let Some(rest) = segment.strip_prefix(prefix) {
            return (kind, rest);
        }
    }

    if let Some(found) = numbered_prefix().find(segment) {
        return (BlockKind::ListNumbered, &segment[found.end()..]);
    }

    if let Some(rest) = segment.strip_prefix("> ") {
        return (BlockKind::Quote, rest);
    }

    if segment.starts_with(DIVIDER_LINE) {
        return (BlockKind::Divider, "");
    }

    (BlockKind::Paragraph, segment)
}

/// A single run with flags inferred from marker presence anywhere in
/// `text`, and every marker removed from the visible text.
///
/// Markers are not matched in pairs: a stray `_` in ordinary prose marks
/// the whole run italic and disappears from it.
fn parse_run(text: &str) -> Run {
    let style = TextStyle::plain()
        .with_bold(text.contains(InlineStyle::Bold.marker()))
        .with_italic(text.contains(InlineStyle::Italic.marker()))
        .with_underline(text.contains(InlineStyle::Underline.marker()));

    Run::styled(any_marker().replace_all(text, "").into_owned(), style)
}
