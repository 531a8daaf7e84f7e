//! LineRule and LineFilter types for Markdown line classification.

use blockdown_core::Block;
use regex::{Captures, Regex};

/// Type alias for block builder functions
pub type BuildFn = Box<dyn Fn(&LineMatch<'_>) -> Block + Send + Sync>;

/// A successful filter match on one source line
pub struct LineMatch<'a> {
    line: &'a str,
    captures: Option<Captures<'a>>,
}

impl<'a> LineMatch<'a> {
    /// The full source line
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Capture group `index` of the matching pattern, or `""` if it did not participate.
    ///
    /// Group 0 is always the full line, including for predicate filters.
    pub fn group(&self, index: usize) -> &'a str {
        if index == 0 {
            return self.line;
        }
        self.captures
            .as_ref()
            .and_then(|c| c.get(index))
            .map(|m| m.as_str())
            .unwrap_or("")
    }
}

/// A filter determines which lines a rule applies to
pub enum LineFilter {
    /// Match a regular expression
    Pattern(Regex),
    /// Match the first expression unless the second one also matches
    PatternUnless(Regex, Regex),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl LineFilter {
    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        LineFilter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a line
    pub fn matches<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        match self {
            LineFilter::Pattern(re) => re.captures(line).map(|c| LineMatch {
                line,
                captures: Some(c),
            }),
            LineFilter::PatternUnless(re, except) => {
                if except.is_match(line) {
                    return None;
                }
                re.captures(line).map(|c| LineMatch {
                    line,
                    captures: Some(c),
                })
            }
            LineFilter::Predicate(f) => f(line).then_some(LineMatch {
                line,
                captures: None,
            }),
        }
    }
}

/// A rule defines how a matched Markdown line becomes a block
pub struct LineRule {
    /// Filter to determine which lines this rule applies to
    pub filter: LineFilter,
    /// Builder that produces the block
    pub build: BuildFn,
}

impl LineRule {
    /// Create a new rule
    pub fn new<F>(filter: LineFilter, build: F) -> Self
    where
        F: Fn(&LineMatch<'_>) -> Block + Send + Sync + 'static,
    {
        Self {
            filter,
            build: Box::new(build),
        }
    }

    /// Create a rule that matches a regular expression
    pub fn for_pattern<F>(pattern: Regex, build: F) -> Self
    where
        F: Fn(&LineMatch<'_>) -> Block + Send + Sync + 'static,
    {
        Self::new(LineFilter::Pattern(pattern), build)
    }

    /// Apply this rule to a line, returning the block if the filter matches
    pub fn apply(&self, line: &str) -> Option<Block> {
        self.filter.matches(line).map(|m| (self.build)(&m))
    }
}
