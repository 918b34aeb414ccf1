//! Error types for Quire Core
//!
//! The markup codec and formatter are total and never fail; these errors
//! cover book editing and (de)serialization around them.

use thiserror::Error;

/// Result type alias using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;

/// Top-level error type for all Quire operations
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Book error: {0}")]
    Book(#[from] BookError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by chapter and book edits
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Cannot delete the last remaining chapter")]
    LastChapter,
}
