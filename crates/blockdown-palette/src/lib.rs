//! # Block Command Palette
//!
//! The slash-command palette used to turn the block at the cursor into a
//! heading, list item, checklist, quote or code block.
//!
//! ## Behavior
//!
//! - **Closed / Open**: the host opens the palette; committing or dismissing closes it
//! - **Filtering**: case-insensitive substring match on label or description, catalog order kept
//! - **Selection**: moves clamp at both ends, no wraparound
//! - **Commit**: emits a single [`CommandId`]; the host maps it to its own block update
//!
//! ## Example
//!
//! ```rust
//! use blockdown_palette::{CommandId, Palette};
//!
//! let mut palette = Palette::new();
//! palette.open();
//! palette.on_query_change("head");
//! palette.on_move_down();
//!
//! assert_eq!(palette.on_commit(), Some(CommandId::Heading2));
//! assert!(!palette.is_open());
//! ```

mod catalog;
mod state;

pub use catalog::{catalog, filter, BlockChange, CommandId, CommandItem, CATALOG};
pub use state::{Palette, PaletteKey, PaletteState};

/// Error type for palette operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
