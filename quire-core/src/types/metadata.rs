//! Book metadata types

use serde::{Deserialize, Serialize};

/// Descriptive metadata for a book
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Book title
    pub title: String,

    /// Author display name
    #[serde(default)]
    pub author: String,

    /// Book description/summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reference to a cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Language code (ISO 639-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Publisher name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Publication date as entered by the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Metadata {
    /// Create new metadata with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Merge the fields present in `patch`
    pub fn apply(&mut self, patch: MetadataPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(cover_image) = patch.cover_image {
            self.cover_image = Some(cover_image);
        }
        if let Some(language) = patch.language {
            self.language = Some(language);
        }
        if let Some(isbn) = patch.isbn {
            self.isbn = Some(isbn);
        }
        if let Some(publisher) = patch.publisher {
            self.publisher = Some(publisher);
        }
        if let Some(publication_date) = patch.publication_date {
            self.publication_date = Some(publication_date);
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

/// Partial metadata update; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub language: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub publication_date: Option<String>,
    pub genre: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}
