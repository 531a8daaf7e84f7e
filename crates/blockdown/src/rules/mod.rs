//! Rule system for Markdown line classification.

mod markdown;
mod rule;

pub use markdown::markdown_rules;
pub use rule::{BuildFn, LineFilter, LineMatch, LineRule};

use blockdown_core::Block;
use indexmap::IndexMap;

use crate::utilities::is_blank_line;

/// Collection of rules for classifying lines
pub struct LineRules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, LineRule>,
    /// Built-in Markdown rules
    markdown_rules: Vec<LineRule>,
}

impl LineRules {
    /// Create a new LineRules instance with the built-in Markdown rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            markdown_rules: markdown_rules(),
        }
    }

    /// Add a custom rule, replacing any earlier rule with the same key in place
    pub fn add(&mut self, key: &str, rule: LineRule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Remove a custom rule by key
    pub fn remove(&mut self, key: &str) -> Option<LineRule> {
        self.custom_rules.shift_remove(key)
    }

    /// Classify one line.
    ///
    /// Blank lines produce no block; anything no rule claims becomes a paragraph.
    pub fn classify(&self, line: &str) -> Option<Block> {
        if is_blank_line(line) {
            return None;
        }

        self.custom_rules
            .values()
            .chain(self.markdown_rules.iter())
            .find_map(|rule| rule.apply(line))
            .or_else(|| Some(Block::paragraph(line)))
    }
}

impl Default for LineRules {
    fn default() -> Self {
        Self::new()
    }
}
