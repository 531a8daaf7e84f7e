//! Line-oriented Markdown parser.
//!
//! Each physical line is classified on its own, top to bottom, and yields at most
//! one block. Fenced code and multi-line quotes are not merged: every line inside
//! them is classified independently.

use blockdown_core::Block;

use crate::rules::{LineRule, LineRules};

/// Markdown parser driven by a set of line rules
pub struct Parser {
    rules: LineRules,
}

impl Parser {
    /// Create a parser with the built-in rules
    pub fn new() -> Self {
        Self {
            rules: LineRules::new(),
        }
    }

    /// Add a custom rule, checked before the built-in ones
    pub fn add_rule(&mut self, key: &str, rule: LineRule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove a custom rule
    pub fn remove_rule(&mut self, key: &str) -> &mut Self {
        self.rules.remove(key);
        self
    }

    /// Parse Markdown into a block sequence
    pub fn parse(&self, markdown: &str) -> Vec<Block> {
        markdown
            .lines()
            .filter_map(|line| self.rules.classify(line))
            .collect()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
