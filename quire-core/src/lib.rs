//! Quire Core Library
//!
//! This crate provides the document model and markup engine behind the Quire
//! ebook editor. Chapter content is stored as a structured [`Document`] and
//! edited as flat markup text; [`markup::decode`] and [`markup::encode`]
//! convert between the two, and [`markup::format`] applies toolbar commands
//! to markup text from a selection or cursor.

pub mod error;
pub mod markup;
pub mod session;
pub mod types;

pub use error::{BookError, QuireError, Result};
pub use markup::InlineStyle;
pub use session::EditorSession;
pub use types::{
    Alignment, Block, BlockKind, Book, Chapter, Document, ImageBlock, Metadata, MetadataPatch,
    Run, TextBlock, TextStyle, Theme, ThemePatch,
};
