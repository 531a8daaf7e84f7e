//! Block document serialization
//!
//! Converts a block sequence into Markdown text.

use crate::ast::{plain_text, Block, Inline, QuoteContent};
use crate::options::{NumberingStyle, Options};

/// Serialize a block sequence to a Markdown string
pub fn serialize(blocks: &[Block], options: &Options) -> String {
    let mut output = String::with_capacity(blocks.len() * 32);
    let mut ordinal = 0u32;

    for block in blocks {
        ordinal = match block {
            Block::NumberedItem(_) => ordinal + 1,
            _ => 0,
        };
        serialize_block(block, options, ordinal, &mut output);
    }

    output.trim().to_string()
}

fn serialize_block(block: &Block, options: &Options, ordinal: u32, out: &mut String) {
    match block {
        Block::Paragraph(content) => {
            serialize_inlines(content, out);
            out.push_str("\n\n");
        }

        Block::Heading { level, content } => {
            for _ in 0..options.render_level(*level) {
                out.push('#');
            }
            out.push(' ');
            serialize_inlines(content, out);
            out.push_str("\n\n");
        }

        // List items stay adjacent: one newline, no blank separator
        Block::BulletItem(content) => {
            out.push_str("- ");
            serialize_inlines(content, out);
            out.push('\n');
        }

        Block::NumberedItem(content) => {
            match options.numbering {
                NumberingStyle::Literal => out.push('1'),
                NumberingStyle::Sequential => out.push_str(&ordinal.to_string()),
            }
            out.push_str(". ");
            serialize_inlines(content, out);
            out.push('\n');
        }

        Block::CheckItem { checked, content } => {
            out.push_str(if *checked { "- [x] " } else { "- [ ] " });
            serialize_inlines(content, out);
            out.push('\n');
        }

        Block::Quote(QuoteContent::Blocks(children)) => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str("> ");
                out.push_str(&child.plain_text());
            }
            out.push_str("\n\n");
        }

        Block::Quote(QuoteContent::Inline(content)) => {
            out.push_str("> ");
            serialize_inlines(content, out);
            out.push_str("\n\n");
        }

        Block::CodeBlock { language, content } => {
            out.push_str(&options.fence);
            out.push_str(language.as_deref().unwrap_or(""));
            out.push('\n');
            serialize_inlines(content, out);
            out.push('\n');
            out.push_str(&options.fence);
            out.push_str("\n\n");
        }

        Block::Unknown { content, .. } => {
            serialize_inlines(content, out);
            out.push_str("\n\n");
        }
    }
}

fn serialize_inlines(inlines: &[Inline], out: &mut String) {
    out.push_str(&plain_text(inlines));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HeadingLevelPolicy;

    fn default_options() -> Options {
        Options::default()
    }

    #[test]
    fn test_paragraph() {
        let blocks = vec![Block::paragraph("Hello World")];
        assert_eq!(serialize(&blocks, &default_options()), "Hello World");
    }

    #[test]
    fn test_paragraphs_are_separated_by_blank_line() {
        let blocks = vec![Block::paragraph("One"), Block::paragraph("Two")];
        assert_eq!(serialize(&blocks, &default_options()), "One\n\nTwo");
    }

    #[test]
    fn test_heading_levels() {
        let blocks = vec![Block::heading(2, "Section")];
        assert_eq!(serialize(&blocks, &default_options()), "## Section");

        let blocks = vec![Block::heading(0, "Unset")];
        assert_eq!(serialize(&blocks, &default_options()), "# Unset");
    }

    #[test]
    fn test_heading_level_policy() {
        let blocks = vec![Block::heading(5, "Deep")];
        assert_eq!(serialize(&blocks, &default_options()), "##### Deep");

        let options = Options {
            heading_level: HeadingLevelPolicy::Clamp,
            ..Default::default()
        };
        assert_eq!(serialize(&blocks, &options), "### Deep");
    }

    #[test]
    fn test_bullet_items_stay_adjacent() {
        let blocks = vec![
            Block::BulletItem(vec![Inline::text("One")]),
            Block::BulletItem(vec![Inline::text("Two")]),
            Block::paragraph("After"),
        ];
        assert_eq!(serialize(&blocks, &default_options()), "- One\n- Two\nAfter");
    }

    #[test]
    fn test_numbered_items_literal() {
        let blocks = vec![
            Block::NumberedItem(vec![Inline::text("First")]),
            Block::NumberedItem(vec![Inline::text("Second")]),
        ];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "1. First\n1. Second"
        );
    }

    #[test]
    fn test_numbered_items_sequential_restart() {
        let options = Options {
            numbering: NumberingStyle::Sequential,
            ..Default::default()
        };
        let blocks = vec![
            Block::NumberedItem(vec![Inline::text("a")]),
            Block::NumberedItem(vec![Inline::text("b")]),
            Block::paragraph("break"),
            Block::NumberedItem(vec![Inline::text("c")]),
        ];
        assert_eq!(
            serialize(&blocks, &options),
            "1. a\n2. b\nbreak\n\n1. c"
        );
    }

    #[test]
    fn test_check_items() {
        let blocks = vec![Block::check_item(false, "A"), Block::check_item(true, "B")];
        assert_eq!(serialize(&blocks, &default_options()), "- [ ] A\n- [x] B");
    }

    #[test]
    fn test_quote_nested() {
        let blocks = vec![Block::Quote(QuoteContent::Blocks(vec![
            Block::paragraph("first"),
            Block::paragraph("second"),
        ]))];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "> first\n> second"
        );
    }

    #[test]
    fn test_quote_inline() {
        let blocks = vec![Block::Quote(QuoteContent::Inline(vec![Inline::text(
            "flat",
        )]))];
        assert_eq!(serialize(&blocks, &default_options()), "> flat");
    }

    #[test]
    fn test_code_block() {
        let blocks = vec![Block::CodeBlock {
            language: Some("rust".to_string()),
            content: vec![Inline::text("let x = 1;")],
        }];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "```rust\nlet x = 1;\n```"
        );

        let blocks = vec![Block::CodeBlock {
            language: None,
            content: vec![Inline::text("plain")],
        }];
        assert_eq!(serialize(&blocks, &default_options()), "```\nplain\n```");
    }

    #[test]
    fn test_custom_fence() {
        let options = Options {
            fence: "~~~".to_string(),
            ..Default::default()
        };
        let blocks = vec![Block::CodeBlock {
            language: Some("sh".to_string()),
            content: vec![Inline::text("ls")],
        }];
        assert_eq!(serialize(&blocks, &options), "~~~sh\nls\n~~~");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_text() {
        let blocks = vec![Block::Unknown {
            kind: "callout".to_string(),
            content: vec![Inline::text("Note")],
        }];
        assert_eq!(serialize(&blocks, &default_options()), "Note");
    }

    #[test]
    fn test_link_serializes_url() {
        let blocks = vec![Block::Paragraph(vec![
            Inline::text("go to "),
            Inline::link("https://example.com", "Example"),
        ])];
        assert_eq!(
            serialize(&blocks, &default_options()),
            "go to https://example.com"
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(serialize(&[], &default_options()), "");
    }
}
