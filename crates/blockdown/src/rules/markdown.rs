//! Built-in Markdown line rules, in priority order.

use blockdown_core::{Block, Inline};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{LineFilter, LineRule};

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s+(.*)$").unwrap());
static CHECK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s+\[\s*([xX]?)\s*\](?:\s+(.*))?$").unwrap());
// An empty bracket right after the dash, or a full checkbox marker
static CHECK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s+\[(?:\s?\]|\s*[xX]?\s*\](?:\s|$))").unwrap());
static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s*(.*)$").unwrap());

/// Create all built-in line rules
pub fn markdown_rules() -> Vec<LineRule> {
    vec![
        heading_rule(),
        bullet_rule(),
        check_rule(),
        numbered_rule(),
        quote_rule(),
    ]
}

fn heading_rule() -> LineRule {
    LineRule::for_pattern((*HEADING).clone(), |m| {
        let level = m.group(1).len().min(u8::MAX as usize) as u8;
        Block::heading(level, m.group(2))
    })
}

// A checkbox marker takes the line away from the bullet rule.
fn bullet_rule() -> LineRule {
    LineRule::new(
        LineFilter::PatternUnless((*BULLET).clone(), (*CHECK_MARKER).clone()),
        |m| Block::BulletItem(vec![Inline::text(m.group(1))]),
    )
}

fn check_rule() -> LineRule {
    LineRule::for_pattern((*CHECK).clone(), |m| {
        Block::check_item(!m.group(1).is_empty(), m.group(2))
    })
}

fn numbered_rule() -> LineRule {
    LineRule::for_pattern((*NUMBERED).clone(), |m| {
        Block::NumberedItem(vec![Inline::text(m.group(1))])
    })
}

fn quote_rule() -> LineRule {
    LineRule::for_pattern((*QUOTE).clone(), |m| Block::quote(m.group(1)))
}
