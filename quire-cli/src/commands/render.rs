//! Render command implementation

use anyhow::{bail, Context, Result};
use quire_core::{Book, Document};
use serde_json::Value;

/// Print a chapter of a book, or a bare document, as markup
pub fn render(input: &str, chapter: Option<&str>) -> Result<()> {
    let json = super::read_input(input)?;
    let value: Value =
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", input))?;

    let markup = if value.is_array() {
        if chapter.is_some() {
            bail!("--chapter only applies to book files");
        }
        let document: Document = serde_json::from_value(value)
            .with_context(|| format!("{} is not a valid document", input))?;
        document.to_markup()
    } else {
        let book: Book = serde_json::from_value(value)
            .with_context(|| format!("{} is not a valid book", input))?;
        let chapter = super::find_chapter(&book, chapter.unwrap_or("1"))?;
        tracing::debug!("Rendering chapter '{}'", chapter.title);
        chapter.content.to_markup()
    };

    println!("{}", markup);
    Ok(())
}
