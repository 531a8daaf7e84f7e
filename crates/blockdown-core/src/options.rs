//! Configuration options for Markdown serialization

/// How numbered list items are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingStyle {
    /// Every item renders as `1.` and the viewer renumbers
    #[default]
    Literal,
    /// Consecutive items render as `1.`, `2.`, ...; any other block restarts the count
    Sequential,
}

/// How heading levels outside 1..=3 are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevelPolicy {
    /// Emit as many `#` as the level says
    #[default]
    PassThrough,
    /// Clamp the level into 1..=3
    Clamp,
}

/// Options for Markdown serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Fence string for code blocks
    pub fence: String,

    /// Numbered list rendering
    pub numbering: NumberingStyle,

    /// Heading level rendering
    pub heading_level: HeadingLevelPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fence: "```".to_string(),
            numbering: NumberingStyle::Literal,
            heading_level: HeadingLevelPolicy::PassThrough,
        }
    }
}

impl Options {
    /// The level a heading is rendered at under these options
    pub fn render_level(&self, level: u8) -> u8 {
        match self.heading_level {
            HeadingLevelPolicy::PassThrough => level.max(1),
            HeadingLevelPolicy::Clamp => level.clamp(1, 3),
        }
    }
}
