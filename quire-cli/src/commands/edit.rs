//! Edit command implementation

use anyhow::Result;
use quire_core::Document;

/// Replace a chapter's content with parsed markup and save the book
pub fn edit(input: &str, chapter: &str, markup: &str) -> Result<()> {
    let mut book = super::load_book(input)?;
    let id = super::find_chapter(&book, chapter)?.id.clone();

    let text = super::read_input(markup)?;
    let document = Document::from_markup(&text);
    let blocks = document.len();

    book.set_chapter_content(&id, document)?;
    book.touch();
    super::save_book(&book, input)?;

    tracing::info!("Updated chapter {} with {} blocks", id, blocks);
    Ok(())
}
