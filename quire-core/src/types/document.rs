//! Document type - the structured content of one chapter

use super::Block;
use crate::markup::codec;
use serde::{Deserialize, Serialize};

/// Ordered sequence of blocks in reading order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from blocks
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse editable markup into a document
    pub fn from_markup(markup: &str) -> Self {
        codec::encode(markup)
    }

    /// Render this document as editable markup
    pub fn to_markup(&self) -> String {
        codec::decode(self)
    }

    /// Append a block
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::from_blocks(blocks)
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::from_blocks(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockKind;

    #[test]
    fn test_document_serializes_as_array() {
        let doc = Document::from_blocks(vec![Block::paragraph("One")]);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.starts_with('['));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_markup_helpers() {
        let doc = Document::from_markup("# Title\n\nBody");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks[0].kind(), Some(BlockKind::Heading1));
        assert_eq!(doc.to_markup(), "# Title\n\nBody");
    }
}
