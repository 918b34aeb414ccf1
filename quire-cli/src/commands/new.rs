//! New command implementation

use anyhow::Result;
use quire_core::{Book, MetadataPatch};

/// Create a new book file
pub fn new(title: &str, author: Option<&str>, user: &str, output: &str) -> Result<()> {
    let mut book = Book::new_empty(user);
    book.update_metadata(MetadataPatch {
        title: Some(title.to_string()),
        author: author.map(str::to_string),
        ..MetadataPatch::default()
    });

    super::save_book(&book, output)?;

    tracing::info!("Created '{}' ({}) -> {}", book.title(), book.id, output);
    Ok(())
}
