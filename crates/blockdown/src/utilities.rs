//! Utility functions shared by the parser and the JSON adapter.

use serde_json::Value;

/// Check if a line is empty or whitespace only
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Flatten an encoded content value to plain text.
///
/// Strings pass through, `null` and other scalars give `""`. In a sequence,
/// each item contributes itself if it is a string, `text` for a text span,
/// `url` for a link span, or its own `content` flattened recursively.
pub fn inline_text(content: &Value) -> String {
    let mut out = String::new();
    push_inline_text(content, &mut out);
    out
}

fn push_inline_text(content: &Value, out: &mut String) {
    match content {
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(s) => out.push_str(s),
                    Value::Object(map) => match map.get("type").and_then(Value::as_str) {
                        Some("text") => out.push_str(str_field(item, "text")),
                        Some("link") => out.push_str(str_field(item, "url")),
                        _ => {
                            if let Some(inner) = map.get("content") {
                                push_inline_text(inner, out);
                            }
                        }
                    },
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

/// Read a string field, `""` when missing or not a string
pub fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Name of a JSON value's type, for diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_text_scalars() {
        assert_eq!(inline_text(&Value::Null), "");
        assert_eq!(inline_text(&json!("raw")), "raw");
        assert_eq!(inline_text(&json!(7)), "");
        assert_eq!(inline_text(&json!({"text": "obj"})), "");
    }

    #[test]
    fn test_inline_text_spans() {
        let content = json!([
            "a",
            {"type": "text", "text": "b", "styles": {"bold": true}},
            {"type": "link", "url": "https://c.example", "text": "c"},
            {"type": "text"},
            42
        ]);
        assert_eq!(inline_text(&content), "abhttps://c.example");
    }

    #[test]
    fn test_inline_text_recurses_into_content() {
        let content = json!([
            {"type": "paragraph", "content": [{"type": "text", "text": "x"}]},
            {"type": "mention", "content": "y"},
            {"type": "empty"}
        ]);
        assert_eq!(inline_text(&content), "xy");
    }

    #[test]
    fn test_is_blank_line() {
        assert!(is_blank_line(""));
        assert!(is_blank_line(" \t "));
        assert!(!is_blank_line(" x "));
    }
}
