//! Markdown report → HTML page
//!
//! # Element Mapping
//!
//! | Markdown                  | HTML                                                   |
//! |---------------------------|--------------------------------------------------------|
//! | first line `# Title`      | `<header class="main-header"><h1 class="title">`       |
//! | `# H`                     | `<h1 id="slug">`                                       |
//! | `## H`                    | `<section id="slug" class="section"><h2>`              |
//! | `### H`                   | `<h3 id="slug">`, then the section gallery if due      |
//! | `#### H`                  | `<h4>`                                                 |
//! | fenced code               | `<pre class="code-block"><code class="language-x">`    |
//! | pipe table                | `<div class="table-wrapper"><table class="data-table">`|
//! | `- item` / `1. item`      | `<ul class="styled-list">` / `<ol class="styled-list">`|
//! | `---`                     | `<hr class="divider">`                                 |
//! | metadata line             | `<p class="metadata">`                                 |
//! | other text                | `<p>`                                                  |
//!
//! # Galleries
//!
//! A level-3 heading carrying a section number (`### 3.1 Step 1`) makes that
//! number current; a level-2 heading resets it to its own number, if any.
//! Right after each level-3 heading the current section's prefixes are looked
//! up in the [`SectionRegistry`](crate::figures::SectionRegistry) and, the
//! first time figures are found for it, a gallery is emitted.
//!
//! # Determinism
//!
//! Same source, same options and same figure tree give byte-identical output:
//! nothing time- or environment-dependent is written into the page.

mod gallery;
mod options;
mod page;
pub(crate) mod transformer;

pub use gallery::render_gallery;
pub use options::{FencePolicy, PageOptions, RenderOptions};
pub use page::{default_css, wrap_in_page};
pub use transformer::{Body, GalleryRecord, OutlineEntry};

use crate::error::ReportError;
use crate::figures::FigureSource;
use transformer::Transformer;

/// A fully rendered report.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Complete HTML document.
    pub html: String,
    pub body: Body,
}

/// Convert the document body only (no `<html>` shell).
pub fn render_body(
    source: &str,
    options: &RenderOptions,
    figures: &dyn FigureSource,
) -> Result<Body, ReportError> {
    Transformer::new(options, figures).run(source)
}

/// Convert a Markdown report into a complete HTML page.
pub fn render(
    source: &str,
    options: &RenderOptions,
    figures: &dyn FigureSource,
) -> Result<Rendered, ReportError> {
    let body = render_body(source, options, figures)?;
    let html = wrap_in_page(&body, &options.page);
    Ok(Rendered { html, body })
}
