//! Chapter type representing a single chapter of a book

use super::{Block, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single chapter of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Stable chapter identifier (`chapter-<uuid>`)
    pub id: String,

    /// Chapter title shown in navigation
    pub title: String,

    /// The content blocks
    pub content: Document,
}

impl Chapter {
    /// Create a chapter with a fresh id and a single empty paragraph
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: format!("chapter-{}", Uuid::new_v4()),
            title: title.into(),
            content: Document::from_blocks(vec![Block::paragraph("")]),
        }
    }

    /// Set the chapter ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the content
    pub fn with_content(mut self, content: Document) -> Self {
        self.content = content;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chapter_has_one_empty_paragraph() {
        let chapter = Chapter::new("Chapter 1");
        assert!(chapter.id.starts_with("chapter-"));
        assert_eq!(chapter.content.blocks, vec![Block::paragraph("")]);
    }
}
