//! Editing session for one open book
//!
//! The session owns the transient state of an editor: which chapter is
//! open, its markup text, and the current selection. The markup text is
//! the source of truth; every change re-parses the whole text into the
//! open chapter's document.

use crate::error::BookError;
use crate::markup::{self, InlineStyle};
use crate::types::{BlockKind, Book, Chapter, Document};
use std::ops::Range;

/// Editor state over a [`Book`]
#[derive(Debug, Clone)]
pub struct EditorSession {
    book: Book,
    chapter_id: String,
    text: String,
    /// Character offsets into `text`
    selection: Range<usize>,
}

impl EditorSession {
    /// Open a book at its first chapter.
    ///
    /// A book without chapters gets a fresh one so there is always
    /// something to edit.
    pub fn open(mut book: Book) -> Self {
        if book.chapters.is_empty() {
            book.add_chapter();
        }
        let chapter = &book.chapters[0];
        let chapter_id = chapter.id.clone();
        let text = chapter.content.to_markup();

        tracing::debug!("Opened '{}' at chapter '{}'", book.title(), chapter.title);

        Self {
            book,
            chapter_id,
            text,
            selection: 0..0,
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Close the session, returning the edited book
    pub fn into_book(self) -> Book {
        self.book
    }

    /// Current markup text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn current_chapter(&self) -> &Chapter {
        self.book
            .chapter(&self.chapter_id)
            .unwrap_or(&self.book.chapters[0])
    }

    /// Document derived from the current text
    pub fn document(&self) -> &Document {
        &self.current_chapter().content
    }

    /// Switch to another chapter and load its markup
    pub fn select_chapter(&mut self, id: &str) -> Result<(), BookError> {
        let chapter = self
            .book
            .chapter(id)
            .ok_or_else(|| BookError::ChapterNotFound(id.to_string()))?;

        self.text = chapter.content.to_markup();
        self.chapter_id = chapter.id.clone();
        self.selection = 0..0;

        tracing::debug!("Switched to chapter '{}'", chapter.title);
        Ok(())
    }

    /// Replace the markup text and re-derive the chapter's document
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let len = self.text.chars().count();
        self.selection = self.selection.start.min(len)..self.selection.end.min(len);
        self.sync();
    }

    /// Record the selection, as character offsets into the text
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.text.chars().count();
        let (start, end) = (start.min(len), end.min(len));
        self.selection = start.min(end)..start.max(end);
    }

    /// Toggle an inline style over the selection.
    ///
    /// Does nothing for an empty selection. The selection is adjusted to
    /// keep covering the same text, markers included.
    pub fn toggle_inline(&mut self, style: InlineStyle) {
        let Range { start, end } = self.selection.clone();
        if start == end {
            return;
        }

        let before = self.text.chars().count();
        self.text = markup::toggle_inline_style(&self.text, start, end, style);
        let after = self.text.chars().count();

        // grows by two markers on wrap, shrinks by two on unwrap
        self.selection = if after >= before {
            start..end + (after - before)
        } else {
            start..end.saturating_sub(before - after)
        };

        tracing::debug!("Toggled {} over {}..{}", style, start, end);
        self.sync();
    }

    /// Change the block kind of the line at the selection start
    pub fn apply_block(&mut self, kind: BlockKind) {
        self.text = markup::apply_block_prefix(&self.text, self.selection.start, kind);
        tracing::debug!("Applied {} at {}", kind.name(), self.selection.start);
        self.sync();
    }

    /// Add a chapter and open it
    pub fn add_chapter(&mut self) -> String {
        let id = self.book.add_chapter();
        if let Err(e) = self.select_chapter(&id) {
            tracing::error!("New chapter could not be opened: {}", e);
        }
        id
    }

    /// Delete a chapter, moving to the first remaining chapter if it was open
    pub fn delete_chapter(&mut self, id: &str) -> Result<Chapter, BookError> {
        let removed = self.book.delete_chapter(id)?;
        if removed.id == self.chapter_id {
            let first = self.book.chapters[0].id.clone();
            self.select_chapter(&first)?;
        }
        Ok(removed)
    }

    fn sync(&mut self) {
        let document = Document::from_markup(&self.text);
        if let Err(e) = self.book.set_chapter_content(&self.chapter_id, document) {
            tracing::error!("Failed to store edited content: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Block;

    fn session() -> EditorSession {
        let mut book = Book::new_empty("user-1");
        let id = book.chapters[0].id.clone();
        book.set_chapter_content(&id, Document::from_markup("Hello world"))
            .unwrap();
        EditorSession::open(book)
    }

    #[test]
    fn test_open_loads_first_chapter() {
        let session = session();
        assert_eq!(session.text(), "Hello world");
        assert_eq!(session.current_chapter().title, "Chapter 1");
        assert_eq!(session.selection(), 0..0);
    }

    #[test]
    fn test_set_text_reparses_document() {
        let mut session = session();
        session.set_text("# Title\n\nBody");
        let kinds: Vec<_> = session.document().iter().filter_map(Block::kind).collect();
        assert_eq!(kinds, vec![BlockKind::Heading1, BlockKind::Paragraph]);
    }

    #[test]
    fn test_toggle_inline_tracks_selection() {
        let mut session = session();
        session.set_selection(0, 5);

        session.toggle_inline(InlineStyle::Bold);
        assert_eq!(session.text(), "**Hello** world");
        assert_eq!(session.selection(), 0..9);
        assert!(session.document().blocks[0].runs()[0].style.bold);

        session.toggle_inline(InlineStyle::Bold);
        assert_eq!(session.text(), "Hello world");
        assert_eq!(session.selection(), 0..5);
    }

    #[test]
    fn test_toggle_inline_ignores_empty_selection() {
        let mut session = session();
        session.set_selection(3, 3);
        session.toggle_inline(InlineStyle::Italic);
        assert_eq!(session.text(), "Hello world");
    }

    #[test]
    fn test_apply_block() {
        let mut session = session();
        session.apply_block(BlockKind::Quote);
        assert_eq!(session.text(), "> Hello world");
        assert_eq!(session.document().blocks[0].kind(), Some(BlockKind::Quote));
    }

    #[test]
    fn test_chapter_navigation() {
        let mut session = session();
        let first = session.current_chapter().id.clone();

        let second = session.add_chapter();
        assert_eq!(session.current_chapter().id, second);
        assert_eq!(session.text(), "");

        session.set_text("Second chapter");
        session.select_chapter(&first).unwrap();
        assert_eq!(session.text(), "Hello world");

        session.select_chapter(&second).unwrap();
        assert_eq!(session.text(), "Second chapter");

        assert_eq!(
            session.select_chapter("missing"),
            Err(BookError::ChapterNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_delete_open_chapter_moves_to_first() {
        let mut session = session();
        let second = session.add_chapter();
        session.delete_chapter(&second).unwrap();
        assert_eq!(session.text(), "Hello world");

        let only = session.current_chapter().id.clone();
        assert_eq!(session.delete_chapter(&only), Err(BookError::LastChapter));
    }
}
