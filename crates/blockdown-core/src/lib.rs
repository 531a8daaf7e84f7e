//! blockdown-core - block document model and Markdown serialization
//!
//! This crate provides the typed block model and its Markdown serializer.
//! It is used by `blockdown`, which adds the line parser, the JSON adapter
//! and the converter service on top.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──parse──▶ ┌────────────────┐
//!                            │                │
//!                            │ Block sequence │ ──serialize──▶ Markdown String
//! JSON blocks ──────decode──▶│                │
//!                            └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use blockdown_core::{serialize, Block, Inline, Options};
//!
//! let blocks = vec![
//!     Block::heading(1, "Title"),
//!     Block::check_item(false, "A"),
//!     Block::check_item(true, "B"),
//!     Block::BulletItem(vec![Inline::text("plain item")]),
//! ];
//!
//! let markdown = serialize(&blocks, &Options::default());
//! assert_eq!(markdown, "# Title\n\n- [ ] A\n- [x] B\n- plain item");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{plain_text, Block, Inline, QuoteContent, Styles};
pub use options::{HeadingLevelPolicy, NumberingStyle, Options};
pub use serialize::serialize;
