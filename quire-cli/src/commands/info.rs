//! Info command implementation

use anyhow::Result;
use serde::Serialize;

/// Book info output
#[derive(Serialize)]
struct BookInfo {
    id: String,
    title: String,
    author: String,
    description: Option<String>,
    updated_at: String,
    chapters: Vec<ChapterInfo>,
}

#[derive(Serialize)]
struct ChapterInfo {
    id: String,
    title: String,
    blocks: usize,
}

/// Display information about a book
pub fn info(input: &str, json: bool) -> Result<()> {
    let book = super::load_book(input)?;

    let info = BookInfo {
        id: book.id.clone(),
        title: book.metadata.title.clone(),
        author: book.metadata.author.clone(),
        description: book
            .metadata
            .description
            .clone()
            .filter(|desc| !desc.is_empty()),
        updated_at: book.updated_at.to_rfc3339(),
        chapters: book
            .chapters
            .iter()
            .map(|chapter| ChapterInfo {
                id: chapter.id.clone(),
                title: chapter.title.clone(),
                blocks: chapter.content.len(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:       {}", info.title);
        if !info.author.is_empty() {
            println!("Author:      {}", info.author);
        }
        if let Some(desc) = &info.description {
            println!("Description: {}", desc);
        }
        println!("Updated:     {}", info.updated_at);
        println!("Chapters:    {}", info.chapters.len());
        for (i, chapter) in info.chapters.iter().enumerate() {
            println!(
                "  {:>3}. {} ({} blocks) [{}]",
                i + 1,
                chapter.title,
                chapter.blocks,
                chapter.id
            );
        }
    }

    Ok(())
}
