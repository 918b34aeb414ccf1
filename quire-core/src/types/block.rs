//! Block and run types for chapter content

use serde::{Deserialize, Serialize};

/// Structural kind of a text block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    #[serde(rename = "heading-1")]
    Heading1,
    #[serde(rename = "heading-2")]
    Heading2,
    #[serde(rename = "heading-3")]
    Heading3,
    ListItem,
    ListNumbered,
    Quote,
    Divider,
}

impl BlockKind {
    /// All kinds, in toolbar order
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Paragraph,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::ListItem,
        BlockKind::ListNumbered,
        BlockKind::Quote,
        BlockKind::Divider,
    ];

    /// Kebab-case name, as used in serialized documents
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading-1",
            BlockKind::Heading2 => "heading-2",
            BlockKind::Heading3 => "heading-3",
            BlockKind::ListItem => "list-item",
            BlockKind::ListNumbered => "list-numbered",
            BlockKind::Quote => "quote",
            BlockKind::Divider => "divider",
        }
    }

    /// Look up a kind by its kebab-case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Horizontal alignment carried on a run's style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Style flags for a run of text.
///
/// Only `bold`, `italic` and `underline` have a markup representation.
/// The remaining fields are carried through serialization untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,

    #[serde(default)]
    pub italic: bool,

    #[serde(default)]
    pub underline: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl TextStyle {
    /// Style with no flags set
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// A contiguous span of text sharing one style
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Run {
    pub text: String,

    #[serde(default)]
    pub style: TextStyle,
}

impl Run {
    /// Create an unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::plain(),
        }
    }

    /// Create a run with the given style
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A block of styled text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub kind: BlockKind,

    /// Never empty: an empty block holds a single empty run
    pub runs: Vec<Run>,
}

impl TextBlock {
    /// Create a block holding a single unstyled run
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            runs: vec![Run::plain(text)],
        }
    }

    /// Create a block from runs, inserting an empty run if none are given
    pub fn with_runs(kind: BlockKind, runs: Vec<Run>) -> Self {
        let runs = if runs.is_empty() {
            vec![Run::default()]
        } else {
            runs
        };
        Self { kind, runs }
    }

    /// Concatenated run text without markers
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// An image, passed through the codec without decomposition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBlock {
    pub src: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

impl ImageBlock {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            caption: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Block-level content element.
///
/// Serialized as a flat object discriminated by `"type"`: images carry
/// `src`/`alt`/`caption`, text blocks carry `children`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub enum Block {
    Image(ImageBlock),
    Text(TextBlock),
}

impl Block {
    /// Create a text block with a single unstyled run
    pub fn text(kind: BlockKind, text: impl Into<String>) -> Self {
        Block::Text(TextBlock::new(kind, text))
    }

    /// Create a paragraph
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::text(BlockKind::Paragraph, text)
    }

    /// Create an image block
    pub fn image(image: ImageBlock) -> Self {
        Block::Image(image)
    }

    /// Text kind of this block, `None` for images
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Block::Text(block) => Some(block.kind),
            Block::Image(_) => None,
        }
    }

    /// Runs of a text block, empty for images
    pub fn runs(&self) -> &[Run] {
        match self {
            Block::Text(block) => &block.runs,
            Block::Image(_) => &[],
        }
    }
}

/// Discriminator of the serialized block form
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawBlockType {
    Image(ImageTag),
    Text(BlockKind),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ImageTag {
    Image,
}

/// Wire shape shared by every block variant
#[derive(Debug, Serialize, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    block_type: RawBlockType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Run>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

impl TryFrom<RawBlock> for Block {
    type Error = String;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        match raw.block_type {
            RawBlockType::Image(ImageTag::Image) => {
                let src = raw
                    .src
                    .ok_or_else(|| "image block is missing `src`".to_string())?;
                Ok(Block::Image(ImageBlock {
                    src,
                    alt: raw.alt,
                    caption: raw.caption,
                }))
            }
            RawBlockType::Text(kind) => Ok(Block::Text(TextBlock::with_runs(
                kind,
                raw.children.unwrap_or_default(),
            ))),
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        match block {
            Block::Image(image) => RawBlock {
                block_type: RawBlockType::Image(ImageTag::Image),
                children: None,
                src: Some(image.src),
                alt: image.alt,
                caption: image.caption,
            },
            Block::Text(text) => RawBlock {
                block_type: RawBlockType::Text(text.kind),
                children: Some(text.runs),
                src: None,
                alt: None,
                caption: None,
            },
        }
    }
}
