//! Block document model
//!
//! This module defines the typed nodes that make up a block document.
//! The model is shared by the Markdown parser, the JSON adapter and the serializer.

use indexmap::IndexMap;

/// Style flags on a text span (bold, italic, ...), in insertion order
pub type Styles = IndexMap<String, bool>;

/// One structural unit of a document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Plain paragraph
    Paragraph(Vec<Inline>),

    /// Heading with level and inline content
    ///
    /// Levels above 3 are carried as-is; see `HeadingLevelPolicy`.
    Heading { level: u8, content: Vec<Inline> },

    /// Bulleted list item
    BulletItem(Vec<Inline>),

    /// Numbered list item (ordinals are assigned at render time)
    NumberedItem(Vec<Inline>),

    /// Checklist item
    CheckItem { checked: bool, content: Vec<Inline> },

    /// Block quote, either wrapping child blocks or holding inline content directly
    Quote(QuoteContent),

    /// Code block with optional language tag
    CodeBlock {
        language: Option<String>,
        content: Vec<Inline>,
    },

    /// A block kind this model does not know (from encoded input)
    Unknown { kind: String, content: Vec<Inline> },
}

/// Content of a quote block
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteContent {
    /// Nested form: one child block per quoted line
    Blocks(Vec<Block>),
    /// Flat form: a single run of inline content
    Inline(Vec<Inline>),
}

/// A leaf run of text inside a block
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Styled text
    Text { text: String, styles: Styles },

    /// Link with its display text
    Link { url: String, text: String },
}

impl Inline {
    /// Create an unstyled text span
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            styles: Styles::new(),
        }
    }

    /// Create a link span
    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        Inline::Link {
            url: url.into(),
            text: text.into(),
        }
    }

    /// The text this span contributes to plain-text extraction.
    ///
    /// Links contribute their URL, not their label.
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text { text, .. } => text,
            Inline::Link { url, .. } => url,
        }
    }
}

impl Block {
    /// Create a paragraph holding a single text span
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Inline::text(text)])
    }

    /// Create a heading holding a single text span
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            content: vec![Inline::text(text)],
        }
    }

    /// Create a check item holding a single text span
    pub fn check_item(checked: bool, text: impl Into<String>) -> Self {
        Block::CheckItem {
            checked,
            content: vec![Inline::text(text)],
        }
    }

    /// Create a quote wrapping one paragraph child
    pub fn quote(text: impl Into<String>) -> Self {
        Block::Quote(QuoteContent::Blocks(vec![Block::paragraph(text)]))
    }

    /// The kind tag used by the block editor's document format
    pub fn kind(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading { .. } => "heading",
            Block::BulletItem(_) => "bulletListItem",
            Block::NumberedItem(_) => "numberedListItem",
            Block::CheckItem { .. } => "checkListItem",
            Block::Quote(_) => "quote",
            Block::CodeBlock { .. } => "codeBlock",
            Block::Unknown { kind, .. } => kind,
        }
    }

    /// Inline content of a leaf block, `None` for quotes
    pub fn inlines(&self) -> Option<&[Inline]> {
        match self {
            Block::Paragraph(content)
            | Block::BulletItem(content)
            | Block::NumberedItem(content)
            | Block::Heading { content, .. }
            | Block::CheckItem { content, .. }
            | Block::CodeBlock { content, .. }
            | Block::Unknown { content, .. } => Some(content),
            Block::Quote(_) => None,
        }
    }

    /// Flatten this block's content to plain text.
    ///
    /// Quote children are concatenated in order, without separators.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Quote(QuoteContent::Blocks(children)) => {
                children.iter().map(Block::plain_text).collect()
            }
            Block::Quote(QuoteContent::Inline(content)) => plain_text(content),
            _ => self.inlines().map(plain_text).unwrap_or_default(),
        }
    }
}

/// Concatenate the plain text of a run of inline spans
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::with_capacity(inlines.iter().map(|i| i.plain_text().len()).sum());
    for inline in inlines {
        out.push_str(inline.plain_text());
    }
    out
}
