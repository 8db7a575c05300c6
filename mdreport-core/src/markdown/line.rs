//! Line classification
//!
//! The transformer never builds a tree: each source line is classified on its
//! own and the state machine in [`crate::html::transformer`] decides what to do
//! with it given the current block mode.

/// What a single (right-trimmed) source line looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Opening or closing code fence; `info` is whatever follows the backticks.
    Fence { info: &'a str },
    /// A pipe-delimited table row (or separator row).
    TableRow,
    Heading { level: u8, text: &'a str },
    Rule,
    Bullet(&'a str),
    Numbered(&'a str),
    Text,
}

pub const FENCE: &str = "```";

/// Classify a line. Callers are expected to have trimmed trailing whitespace.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if let Some(info) = line.strip_prefix(FENCE) {
        return LineKind::Fence { info: info.trim() };
    }

    if is_table_row(line) {
        return LineKind::TableRow;
    }

    if let Some((level, text)) = heading(line) {
        return LineKind::Heading { level, text };
    }

    if is_rule(line) {
        return LineKind::Rule;
    }

    if let Some(content) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::Bullet(content.trim());
    }

    if let Some(content) = numbered_item(line) {
        return LineKind::Numbered(content);
    }

    LineKind::Text
}

fn is_table_row(line: &str) -> bool {
    line.strip_prefix('|')
        .map(|rest| rest.contains('|'))
        .unwrap_or(false)
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=4).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

fn is_rule(line: &str) -> bool {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first @ ('-' | '*' | '_')) => trimmed.len() >= 3 && chars.all(|c| c == first),
        _ => false,
    }
}

/// `12. text` → `text`. Requires whitespace (or end of line) after the dot so
/// that section numbers like `3.1` stay paragraphs.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    if rest.is_empty() {
        return Some("");
    }
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}
