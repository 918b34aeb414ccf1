//! Core types for documents and books

mod block;
mod book;
mod chapter;
mod document;
mod metadata;
mod theme;

pub use block::{Alignment, Block, BlockKind, ImageBlock, Run, TextBlock, TextStyle};
pub use book::Book;
pub use chapter::Chapter;
pub use document::Document;
pub use metadata::{Metadata, MetadataPatch};
pub use theme::{Theme, ThemePatch};
