//! Inline markup: bold, italic, code spans, escaping and slugs.
//!
//! Conversion is plain pattern substitution, there is no inline parser. Code
//! spans are cut out first so emphasis markers inside backticks survive
//! untouched.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static SECTION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.\d+)").unwrap());

/// `**x**` → `<strong>x</strong>`. Used on its own for table cells.
pub fn convert_bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>$1</strong>").into_owned()
}

fn convert_emphasis(text: &str) -> String {
    let bold = convert_bold(text);
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}

/// Bold, italic and inline code.
pub fn convert_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in CODE_SPAN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&convert_emphasis(&text[last..whole.start()]));
        out.push_str("<code>");
        out.push_str(&escape_text(&caps[1]));
        out.push_str("</code>");
        last = whole.end();
    }
    out.push_str(&convert_emphasis(&text[last..]));
    out
}

/// Inline markup with the markers removed, for places that take plain text
/// such as `<title>`.
pub fn plain_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in CODE_SPAN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&strip_emphasis(&text[last..whole.start()]));
        out.push_str(&caps[1]);
        last = whole.end();
    }
    out.push_str(&strip_emphasis(&text[last..]));
    out
}

fn strip_emphasis(text: &str) -> String {
    let bold = BOLD.replace_all(text, "$1");
    ITALIC.replace_all(&bold, "$1").into_owned()
}

/// Escape text content so embedded markup is shown rather than executed.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Anchor identifier for a heading.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-` and trims separators from both ends. Collisions are not
/// resolved.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// First `N.M` number in a heading, e.g. `3.1` in `3.1 Step 1: Overview`.
pub fn section_number(text: &str) -> Option<&str> {
    SECTION_NUMBER.find(text).map(|m| m.as_str())
}
