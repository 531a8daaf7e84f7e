//! # blockdown
//!
//! Convert between block-editor documents and Markdown.
//!
//! Block editors hold a document as a tree of typed blocks (headings, list
//! items, checklists, quotes, code). This crate turns such a document into a
//! flat Markdown string for storage, and turns Markdown back into blocks when
//! a document is loaded.
//!
//! ## Design
//!
//! - **Line-local parsing**: every physical line is classified on its own by an
//!   ordered set of line rules; custom rules run before the built-in ones.
//! - **Total conversion**: neither direction fails. Input that cannot be read
//!   as blocks degrades to a best-effort string and the fallback is logged.
//! - **Typed model**: blocks are a closed enum, so the parser and the
//!   serializer are matched exhaustively against the same set of kinds.
//!
//! ## Example
//!
//! ```rust
//! use blockdown::{parse, serialize, Block};
//!
//! let blocks = parse("# Title\n\n- [ ] A\n- [x] B\n");
//! assert_eq!(blocks[0], Block::heading(1, "Title"));
//!
//! let markdown = serialize(&blocks);
//! assert_eq!(markdown, "# Title\n\n- [ ] A\n- [x] B");
//! ```
//!
//! ## Example (encoded blocks)
//!
//! ```rust
//! use blockdown::serialize;
//!
//! let markdown = serialize(r#"[{"type": "paragraph", "content": "Hello"}]"#);
//! assert_eq!(markdown, "Hello");
//!
//! // Text that is not JSON is taken to be Markdown already
//! assert_eq!(serialize("plain *markdown*"), "plain *markdown*");
//! ```

pub mod json;
mod parser;
mod rules;
mod service;
mod utilities;

pub use blockdown_core::{
    plain_text, Block, HeadingLevelPolicy, Inline, NumberingStyle, Options, QuoteContent, Styles,
};
pub use json::{decode, decode_value, encode};
pub use parser::Parser;
pub use rules::{markdown_rules, BuildFn, LineFilter, LineMatch, LineRule, LineRules};
pub use service::{ConverterService, Degraded, Input};
pub use utilities::*;

use once_cell::sync::Lazy;

static DEFAULT_SERVICE: Lazy<ConverterService> = Lazy::new(ConverterService::new);

/// Parse Markdown into blocks with the default rules
pub fn parse(markdown: &str) -> Vec<Block> {
    DEFAULT_SERVICE.parse(markdown)
}

/// Serialize blocks, encoded blocks or a JSON value to Markdown with default options
pub fn serialize<'a>(input: impl Into<Input<'a>>) -> String {
    DEFAULT_SERVICE.serialize_input(input)
}

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a sequence of blocks, found {0}")]
    NotASequence(&'static str),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
