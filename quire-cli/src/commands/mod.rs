//! CLI command implementations

mod edit;
mod format;
mod info;
mod new;
mod parse;
mod render;

pub use edit::edit;
pub use format::{block, format};
pub use info::info;
pub use new::new;
pub use parse::parse;
pub use render::render;

use anyhow::{bail, Context, Result};
use quire_core::{Book, Chapter};
use std::fs;
use std::io::Read;

/// Read a text input, where `-` means stdin
pub(crate) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    fs::read_to_string(input).with_context(|| format!("Failed to open input file: {}", input))
}

/// Load a book from a JSON file
pub(crate) fn load_book(path: &str) -> Result<Book> {
    let json = read_input(path)?;
    Book::from_json(&json).with_context(|| format!("Failed to parse book {}", path))
}

/// Write a book to a JSON file
pub(crate) fn save_book(book: &Book, path: &str) -> Result<()> {
    let json = book.to_json().context("Failed to serialize book")?;
    fs::write(path, json).with_context(|| format!("Failed to write book file: {}", path))
}

/// Find a chapter by id, or by 1-based position when `selector` is a number
pub(crate) fn find_chapter<'a>(book: &'a Book, selector: &str) -> Result<&'a Chapter> {
    if let Some(chapter) = book.chapter(selector) {
        return Ok(chapter);
    }

    if let Ok(position) = selector.parse::<usize>() {
        if let Some(chapter) = position.checked_sub(1).and_then(|i| book.chapters.get(i)) {
            return Ok(chapter);
        }
        bail!(
            "Chapter {} is out of range (book has {} chapters)",
            position,
            book.chapters.len()
        );
    }

    bail!("No chapter with id '{}'", selector)
}

/// Print `text` or write it back to `input`
pub(crate) fn emit(text: &str, input: &str, in_place: bool) -> Result<()> {
    if in_place {
        if input == "-" {
            bail!("--in-place cannot be used with stdin");
        }
        fs::write(input, text).with_context(|| format!("Failed to write {}", input))?;
        tracing::info!("Updated {}", input);
    } else {
        print!("{}", text);
    }
    Ok(())
}
