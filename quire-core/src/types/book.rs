//! The main Book type - the root of a stored project

use super::{Block, Chapter, Document, Metadata, MetadataPatch, Theme, ThemePatch};
use crate::error::{BookError, QuireError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const STARTER_TEXT: &str = "Start writing your book here...";

/// A book under edit: metadata, theme, and ordered chapters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier (`book-<uuid>`)
    pub id: String,

    /// Book metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Ordered list of chapters
    pub chapters: Vec<Chapter>,

    #[serde(default)]
    pub theme: Theme,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Owner of the book
    pub user_id: String,
}

impl Book {
    /// Create a starter book with one chapter of placeholder text
    pub fn new_empty(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        let chapter = Chapter::new("Chapter 1")
            .with_content(Document::from_blocks(vec![Block::paragraph(STARTER_TEXT)]));

        Self {
            id: format!("book-{}", Uuid::new_v4()),
            metadata: Metadata::new("Untitled Book").with_description(""),
            chapters: vec![chapter],
            theme: Theme::default(),
            created_at: now,
            updated_at: now,
            user_id: user_id.into(),
        }
    }

    /// Get the book title
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Look up a chapter by id
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.id == id)
    }

    fn chapter_mut(&mut self, id: &str) -> Result<&mut Chapter, BookError> {
        self.chapters
            .iter_mut()
            .find(|chapter| chapter.id == id)
            .ok_or_else(|| BookError::ChapterNotFound(id.to_string()))
    }

    /// Append a new `Chapter N` with an empty paragraph, returning its id
    pub fn add_chapter(&mut self) -> String {
        let chapter = Chapter::new(format!("Chapter {}", self.chapters.len() + 1));
        let id = chapter.id.clone();
        self.chapters.push(chapter);
        id
    }

    /// Rename a chapter
    pub fn rename_chapter(&mut self, id: &str, title: impl Into<String>) -> Result<(), BookError> {
        self.chapter_mut(id)?.title = title.into();
        Ok(())
    }

    /// Replace a chapter's content
    pub fn set_chapter_content(&mut self, id: &str, content: Document) -> Result<(), BookError> {
        self.chapter_mut(id)?.content = content;
        Ok(())
    }

    /// Remove a chapter. The last remaining chapter cannot be removed.
    pub fn delete_chapter(&mut self, id: &str) -> Result<Chapter, BookError> {
        let index = self
            .chapters
            .iter()
            .position(|chapter| chapter.id == id)
            .ok_or_else(|| BookError::ChapterNotFound(id.to_string()))?;

        if self.chapters.len() <= 1 {
            tracing::warn!("Refusing to delete the only chapter of '{}'", self.title());
            return Err(BookError::LastChapter);
        }

        Ok(self.chapters.remove(index))
    }

    /// Merge a partial metadata update
    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        self.metadata.apply(patch);
    }

    /// Merge a partial theme update
    pub fn update_theme(&mut self, patch: ThemePatch) {
        self.theme.apply(patch);
    }

    /// Mark the book as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Deserialize a book from JSON
    pub fn from_json(json: &str) -> Result<Self, QuireError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this book as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, QuireError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
