//! Line-level Markdown handling.
//!
//! This is deliberately not a Markdown parser. The supported subset is what a
//! hand-written scientific report uses: one title line, four heading levels,
//! fenced code, pipe tables, flat lists, rules and paragraphs with inline
//! bold/italic/code.

pub mod inline;
pub mod line;
pub mod list;
pub mod table;

pub use inline::{convert_bold, convert_inline, escape_attr, escape_text, plain_text, slugify};
pub use line::{classify, LineKind};
pub use list::{ListKind, ListState};
pub use table::TableBuffer;
