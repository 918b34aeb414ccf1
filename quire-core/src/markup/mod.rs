//! The markup dialect: a constrained, line-oriented Markdown.
//!
//! Blocks are separated by a blank line and introduced by a short prefix
//! (`# `, `> `, `- `, ...). Inline styles wrap a whole run in a marker
//! (`**`, `_`, `~`). [`codec`] converts between markup and
//! [`Document`](crate::types::Document); [`format`] edits markup text in
//! place from a selection or cursor.

pub mod codec;
pub mod format;

pub use codec::{decode, encode};
pub use format::{apply_block_prefix, toggle_inline_style};

use crate::types::{BlockKind, TextStyle};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Separator between blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Markup prefix that introduces a block of the given kind
pub fn block_prefix(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Heading1 => "# ",
        BlockKind::Heading2 => "## ",
        BlockKind::Heading3 => "### ",
        BlockKind::ListItem => "- ",
        BlockKind::ListNumbered => "1. ",
        BlockKind::Quote => "> ",
        BlockKind::Divider => "---\n",
        BlockKind::Paragraph => "",
    }
}

/// `^[0-9]+\. ` - a numbered list item of any number
pub(crate) fn numbered_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\. ").expect("Invalid numbered prefix regex"))
}

/// Any one recognized block prefix at the start of a line
pub(crate) fn any_block_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(#+ |> |- |[0-9]+\. |---)").expect("Invalid block prefix regex")
    })
}

/// Any inline marker, anywhere
pub(crate) fn any_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*|_|~").expect("Invalid marker regex"))
}

/// Inline style with a markup marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
}

impl InlineStyle {
    /// Wrapping order when rendering a run: bold innermost, underline outermost
    pub const ALL: [InlineStyle; 3] = [InlineStyle::Bold, InlineStyle::Italic, InlineStyle::Underline];

    /// Marker that wraps text in this style
    pub fn marker(self) -> &'static str {
        match self {
            InlineStyle::Bold => "**",
            InlineStyle::Italic => "_",
            InlineStyle::Underline => "~",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InlineStyle::Bold => "bold",
            InlineStyle::Italic => "italic",
            InlineStyle::Underline => "underline",
        }
    }

    /// Whether the flag for this style is set
    pub fn is_set(self, style: &TextStyle) -> bool {
        match self {
            InlineStyle::Bold => style.bold,
            InlineStyle::Italic => style.italic,
            InlineStyle::Underline => style.underline,
        }
    }

    /// Surround `text` with this style's marker
    pub fn wrap(self, text: &str) -> String {
        let marker = self.marker();
        format!("{marker}{text}{marker}")
    }

    /// Inner text if `text` is exactly `marker + inner + marker`
    pub fn unwrap_text(self, text: &str) -> Option<&str> {
        let marker = self.marker();
        if text.len() < marker.len() * 2 {
            return None;
        }
        text.strip_prefix(marker)?.strip_suffix(marker)
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InlineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| format!("unknown inline style '{s}' (expected bold, italic or underline)"))
    }
}
