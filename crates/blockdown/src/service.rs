//! ConverterService - the main entry point for block/Markdown conversion.

use blockdown_core::{serialize, Block, Options};
use serde_json::Value;
use tracing::{debug, warn};

use crate::json::{decode, decode_value};
use crate::parser::Parser;
use crate::rules::LineRule;
use crate::ConvertError;

/// What the serializer was handed
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// A typed block sequence
    Blocks(&'a [Block]),
    /// A string holding JSON-encoded blocks, or Markdown already
    Encoded(&'a str),
    /// An already-decoded JSON value
    Value(&'a Value),
}

impl<'a> From<&'a [Block]> for Input<'a> {
    fn from(blocks: &'a [Block]) -> Self {
        Input::Blocks(blocks)
    }
}

impl<'a> From<&'a Vec<Block>> for Input<'a> {
    fn from(blocks: &'a Vec<Block>) -> Self {
        Input::Blocks(blocks)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Encoded(text)
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Value(value)
    }
}

/// A serialization that fell back to a best-effort result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degraded {
    /// The string was not JSON; it is returned as Markdown unchanged
    PassThrough(String),
    /// The input decoded to something other than a block sequence
    Empty(String),
}

impl Degraded {
    /// The value handed to callers of the infallible API
    pub fn into_output(self) -> String {
        match self {
            Degraded::PassThrough(text) => text,
            Degraded::Empty(_) => String::new(),
        }
    }
}

/// The main service for converting between blocks and Markdown
pub struct ConverterService {
    options: Options,
    parser: Parser,
}

impl ConverterService {
    /// Create a new ConverterService with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            parser: Parser::new(),
        }
    }

    /// Create a ConverterService with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            parser: Parser::new(),
        }
    }

    /// Add a custom line rule to the parser
    pub fn add_rule(&mut self, key: &str, rule: LineRule) -> &mut Self {
        self.parser.add_rule(key, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert Markdown to blocks
    pub fn parse(&self, markdown: &str) -> Vec<Block> {
        self.parser.parse(markdown)
    }

    /// Convert blocks to Markdown
    pub fn serialize(&self, blocks: &[Block]) -> String {
        serialize(blocks, &self.options)
    }

    /// Convert any accepted input to Markdown, reporting fallbacks as `Err`
    pub fn try_serialize_input<'a>(
        &self,
        input: impl Into<Input<'a>>,
    ) -> std::result::Result<String, Degraded> {
        let decoded = match input.into() {
            Input::Blocks(blocks) => return Ok(self.serialize(blocks)),
            Input::Encoded(text) => decode(text).map_err(|e| match e {
                ConvertError::InvalidJson(_) => Degraded::PassThrough(text.to_string()),
                other => Degraded::Empty(other.to_string()),
            }),
            Input::Value(value) => {
                decode_value(value).map_err(|e| Degraded::Empty(e.to_string()))
            }
        };

        decoded.map(|blocks| self.serialize(&blocks))
    }

    /// Convert any accepted input to Markdown.
    ///
    /// Never fails: text that is not JSON comes back unchanged, and input that
    /// does not decode to a block sequence gives `""`.
    pub fn serialize_input<'a>(&self, input: impl Into<Input<'a>>) -> String {
        match self.try_serialize_input(input) {
            Ok(markdown) => markdown,
            Err(degraded) => {
                match &degraded {
                    Degraded::PassThrough(_) => {
                        debug!("input is not encoded blocks, passing it through as Markdown")
                    }
                    Degraded::Empty(reason) => warn!(%reason, "failed to convert blocks to Markdown"),
                }
                degraded.into_output()
            }
        }
    }
}

impl Default for ConverterService {
    fn default() -> Self {
        Self::new()
    }
}
