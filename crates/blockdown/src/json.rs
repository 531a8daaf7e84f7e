//! JSON block format support.
//!
//! The block editor exchanges documents as a JSON array of
//! `{ "type", "props", "content" }` objects. This module decodes that format
//! into the typed block model, leniently, and encodes the model back.

use blockdown_core::{Block, Inline, QuoteContent, Styles};
use serde_json::{json, Map, Value};

use crate::utilities::{inline_text, str_field, value_kind};
use crate::{ConvertError, Result};

/// Decode a JSON-encoded block sequence.
///
/// # Example
///
/// ```rust
/// use blockdown::{decode, Block};
///
/// let blocks = decode(r#"[{"type": "heading", "props": {"level": 2}, "content": "Hi"}]"#).unwrap();
/// assert_eq!(blocks, vec![Block::heading(2, "Hi")]);
/// ```
pub fn decode(input: &str) -> Result<Vec<Block>> {
    let value: Value = serde_json::from_str(input)?;
    decode_value(&value)
}

/// Decode an already-parsed JSON value. Anything but an array is rejected.
pub fn decode_value(value: &Value) -> Result<Vec<Block>> {
    let items = value
        .as_array()
        .ok_or_else(|| ConvertError::NotASequence(value_kind(value)))?;
    Ok(items.iter().map(decode_block).collect())
}

/// Decode a single block object; non-objects become empty unknown blocks
fn decode_block(value: &Value) -> Block {
    let kind = str_field(value, "type");
    let content = value.get("content").unwrap_or(&Value::Null);

    match kind {
        "paragraph" => Block::Paragraph(decode_inlines(content)),
        "heading" => Block::Heading {
            level: heading_level(value),
            content: decode_inlines(content),
        },
        "bulletListItem" | "bulletItem" => Block::BulletItem(decode_inlines(content)),
        "numberedListItem" | "numberedItem" => Block::NumberedItem(decode_inlines(content)),
        "checkListItem" | "checkItem" => Block::CheckItem {
            checked: prop(value, "checked").is_some_and(is_truthy),
            content: decode_inlines(content),
        },
        "quote" => Block::Quote(decode_quote(content)),
        "codeBlock" => Block::CodeBlock {
            language: prop(value, "language")
                .and_then(Value::as_str)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            content: decode_inlines(content),
        },
        other => Block::Unknown {
            kind: other.to_string(),
            content: decode_inlines(content),
        },
    }
}

fn prop<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get("props").and_then(|p| p.get(key))
}

// Numbers and numeric strings are truncated; anything else, or a level
// below 1, means level 1.
fn heading_level(value: &Value) -> u8 {
    let level = match prop(value, "level") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    level
        .map(f64::trunc)
        .filter(|l| *l >= 1.0)
        .map(|l| l.min(u8::MAX as f64) as u8)
        .unwrap_or(1)
}

// Flags written by loosely typed editors: `1`, `"yes"` and objects count as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode inline content.
///
/// The plain text of the result always equals `inline_text(content)`.
fn decode_inlines(content: &Value) -> Vec<Inline> {
    match content {
        Value::String(s) => vec![Inline::text(s.as_str())],
        Value::Array(items) => items.iter().filter_map(decode_inline).collect(),
        _ => Vec::new(),
    }
}

fn decode_inline(item: &Value) -> Option<Inline> {
    match item {
        Value::String(s) => Some(Inline::text(s.as_str())),
        Value::Object(map) => match str_field(item, "type") {
            "text" => Some(Inline::Text {
                text: str_field(item, "text").to_string(),
                styles: decode_styles(map.get("styles")),
            }),
            "link" => {
                let text = match map.get("text") {
                    Some(Value::String(t)) => t.clone(),
                    _ => inline_text(map.get("content").unwrap_or(&Value::Null)),
                };
                Some(Inline::link(str_field(item, "url"), text))
            }
            _ => map.get("content").map(|inner| Inline::text(inline_text(inner))),
        },
        _ => None,
    }
}

fn decode_styles(styles: Option<&Value>) -> Styles {
    styles
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(name, flag)| flag.as_bool().map(|on| (name.clone(), on)))
                .collect()
        })
        .unwrap_or_default()
}

/// A quote whose items are all spans is the flat form; anything else holds child blocks.
fn decode_quote(content: &Value) -> QuoteContent {
    match content {
        Value::Array(items) if !items.is_empty() && items.iter().all(is_inline_item) => {
            QuoteContent::Inline(decode_inlines(content))
        }
        Value::Array(items) => QuoteContent::Blocks(items.iter().map(decode_block).collect()),
        other => QuoteContent::Inline(decode_inlines(other)),
    }
}

fn is_inline_item(item: &Value) -> bool {
    match item {
        Value::String(_) => true,
        Value::Object(_) => matches!(str_field(item, "type"), "text" | "link"),
        _ => false,
    }
}

/// Encode a block sequence into the JSON block format
pub fn encode(blocks: &[Block]) -> Value {
    Value::Array(blocks.iter().map(encode_block).collect())
}

fn encode_block(block: &Block) -> Value {
    let mut out = Map::new();
    out.insert("type".to_string(), json!(block.kind()));

    match block {
        Block::Heading { level, .. } => {
            out.insert("props".to_string(), json!({ "level": level }));
        }
        Block::CheckItem { checked, .. } => {
            out.insert("props".to_string(), json!({ "checked": checked }));
        }
        Block::CodeBlock {
            language: Some(language),
            ..
        } => {
            out.insert("props".to_string(), json!({ "language": language }));
        }
        _ => {}
    }

    let content = match block {
        Block::Quote(QuoteContent::Blocks(children)) => encode(children),
        Block::Quote(QuoteContent::Inline(content)) => encode_inlines(content),
        _ => encode_inlines(block.inlines().unwrap_or_default()),
    };
    out.insert("content".to_string(), content);

    Value::Object(out)
}

fn encode_inlines(inlines: &[Inline]) -> Value {
    Value::Array(
        inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text { text, styles } => json!({
                    "type": "text",
                    "text": text,
                    "styles": styles
                        .iter()
                        .map(|(name, on)| (name.clone(), Value::Bool(*on)))
                        .collect::<Map<String, Value>>(),
                }),
                Inline::Link { url, text } => json!({
                    "type": "link",
                    "url": url,
                    "text": text,
                }),
            })
            .collect(),
    )
}
