//! Line-driven Markdown → HTML state machine.
//!
//! One pass over the source. Every line is classified (see
//! [`crate::markdown::line`]) and handled according to the current block mode:
//!
//! | Mode   | Entered by            | Left by                           |
//! |--------|-----------------------|-----------------------------------|
//! | Normal | start, fence close    |                                   |
//! | Code   | opening fence         | closing fence, end of document    |
//! | Table  | first pipe row        | first non-table line, end of doc  |
//!
//! Lists and section containers are tracked next to the mode: a list stays
//! open while consecutive item lines arrive, a section stays open until the
//! next level-2 heading or the end of the document.

use super::gallery::render_gallery;
use super::options::{FencePolicy, RenderOptions};
use crate::error::ReportError;
use crate::figures::{figures_for, FigureSource};
use crate::markdown::inline::section_number;
use crate::markdown::line::FENCE;
use crate::markdown::{
    classify, convert_inline, escape_attr, escape_text, slugify, LineKind, ListKind, ListState,
    TableBuffer,
};
use log::{info, warn};
use std::collections::HashSet;

/// A level-2 heading, in document order. Drives the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub slug: String,
    pub text: String,
}

/// A gallery that was spliced into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRecord {
    pub section: String,
    pub figures: usize,
}

/// Output of the body pass, before the page shell is added.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Plain-text title taken from the first line.
    pub title: String,
    pub html: String,
    pub outline: Vec<OutlineEntry>,
    pub galleries: Vec<GalleryRecord>,
}

impl Body {
    pub fn figure_count(&self) -> usize {
        self.galleries.iter().map(|g| g.figures).sum()
    }
}

#[derive(Debug)]
enum BlockMode {
    Normal,
    Code { opened_at: usize },
    Table(TableBuffer),
}

pub(crate) struct Transformer<'a> {
    options: &'a RenderOptions,
    figures: &'a dyn FigureSource,
    out: Vec<String>,
    mode: BlockMode,
    list: ListState,
    section_open: bool,
    current_section: Option<String>,
    visited_sections: HashSet<String>,
    title: Option<String>,
    outline: Vec<OutlineEntry>,
    galleries: Vec<GalleryRecord>,
}

impl<'a> Transformer<'a> {
    pub(crate) fn new(options: &'a RenderOptions, figures: &'a dyn FigureSource) -> Self {
        Self {
            options,
            figures,
            out: Vec::new(),
            mode: BlockMode::Normal,
            list: ListState::default(),
            section_open: false,
            current_section: None,
            visited_sections: HashSet::new(),
            title: None,
            outline: Vec::new(),
            galleries: Vec::new(),
        }
    }

    pub(crate) fn run(mut self, source: &str) -> Result<Body, ReportError> {
        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim_end();
            if index == 0 {
                self.title_line(line);
                continue;
            }
            self.line(index + 1, line)?;
        }
        self.finish()
    }

    fn title_line(&mut self, line: &str) {
        let text = line
            .strip_prefix("# ")
            .map(str::trim)
            .unwrap_or_else(|| line.trim());
        let text = if text.is_empty() {
            self.options.page.title.as_str()
        } else {
            text
        };
        self.out.push(format!(
            "<header class=\"main-header\">\n<h1 class=\"title\">{}</h1>\n</header>\n\n",
            convert_inline(text)
        ));
        self.title = Some(text.to_string());
    }

    fn line(&mut self, number: usize, line: &str) -> Result<(), ReportError> {
        if let BlockMode::Code { .. } = self.mode {
            if line.starts_with(FENCE) {
                self.out.push("</code></pre>\n\n".to_string());
                self.mode = BlockMode::Normal;
            } else {
                self.out.push(format!("{}\n", escape_text(line)));
            }
            return Ok(());
        }

        let kind = classify(line);

        if kind == LineKind::TableRow {
            self.list.close(&mut self.out);
            match &mut self.mode {
                BlockMode::Table(buffer) => buffer.push(line),
                _ => self.mode = BlockMode::Table(TableBuffer::starting_with(line)),
            }
            return Ok(());
        }
        self.flush_table();

        match kind {
            LineKind::Bullet(content) => {
                self.list
                    .item(ListKind::Unordered, &convert_inline(content), &mut self.out);
                return Ok(());
            }
            LineKind::Numbered(content) => {
                self.list
                    .item(ListKind::Ordered, &convert_inline(content), &mut self.out);
                return Ok(());
            }
            _ => self.list.close(&mut self.out),
        }

        match kind {
            LineKind::Fence { info } => self.open_code(number, info),
            LineKind::Heading { level, text } => self.heading(level, text)?,
            LineKind::Rule => self.out.push("<hr class=\"divider\">\n".to_string()),
            LineKind::Blank => self.out.push("\n".to_string()),
            LineKind::Text => self.text(line),
            LineKind::TableRow | LineKind::Bullet(_) | LineKind::Numbered(_) => {}
        }
        Ok(())
    }

    fn open_code(&mut self, number: usize, info: &str) {
        let language = info
            .split_whitespace()
            .next()
            .unwrap_or(&self.options.default_code_language);
        self.out.push(format!(
            "<pre class=\"code-block\"><code class=\"language-{}\">\n",
            escape_attr(language)
        ));
        self.mode = BlockMode::Code { opened_at: number };
    }

    fn heading(&mut self, level: u8, text: &str) -> Result<(), ReportError> {
        let slug = slugify(text);
        let display = convert_inline(text);
        match level {
            1 => self
                .out
                .push(format!("<h1 id=\"{slug}\">{display}</h1>\n")),
            2 => {
                self.close_section();
                self.out.push(format!(
                    "<section id=\"{slug}\" class=\"section\">\n<h2>{display}</h2>\n"
                ));
                self.section_open = true;
                self.outline.push(OutlineEntry {
                    slug,
                    text: text.to_string(),
                });
                self.current_section = section_number(text).map(str::to_string);
            }
            3 => {
                if self.opens_section(text) {
                    if let Some(number) = section_number(text) {
                        self.current_section = Some(number.to_string());
                    }
                }
                self.out
                    .push(format!("<h3 id=\"{slug}\">{display}</h3>\n"));
                self.gallery()?;
            }
            _ => self.out.push(format!("<h4>{display}</h4>\n")),
        }
        Ok(())
    }

    /// `### 3.2 Step 2` moves to section 3.2; `### Comparison with Table 3.2` does not.
    fn opens_section(&self, text: &str) -> bool {
        match self.options.section_keyword.as_deref() {
            Some(keyword) if !keyword.is_empty() => text
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            _ => true,
        }
    }

    /// Splice the gallery for the current section, once per section per run.
    fn gallery(&mut self) -> Result<(), ReportError> {
        let Some(section) = self.current_section.clone() else {
            return Ok(());
        };
        let Some(prefixes) = self.options.sections.prefixes_for(&section) else {
            return Ok(());
        };
        if !self.visited_sections.insert(section.clone()) {
            return Ok(());
        }

        let figures = figures_for(self.figures, prefixes)?;
        if figures.is_empty() {
            info!("section {section}: no figures for prefixes {prefixes:?}");
            return Ok(());
        }

        info!("section {section}: gallery with {} figures", figures.len());
        self.out.push(render_gallery(
            &section,
            &figures,
            self.options.gallery_titles,
        ));
        self.galleries.push(GalleryRecord {
            section,
            figures: figures.len(),
        });
        Ok(())
    }

    fn text(&mut self, line: &str) {
        let is_metadata = self
            .options
            .metadata_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()));
        if is_metadata {
            self.out
                .push(format!("<p class=\"metadata\">{}</p>\n", convert_inline(line)));
        } else {
            self.out.push(format!("<p>{}</p>\n", convert_inline(line)));
        }
    }

    fn flush_table(&mut self) {
        if let BlockMode::Table(buffer) = std::mem::replace(&mut self.mode, BlockMode::Normal) {
            self.out.push(buffer.render());
        }
    }

    fn close_section(&mut self) {
        if self.section_open {
            self.out.push("</section>\n\n".to_string());
            self.section_open = false;
        }
    }

    fn finish(mut self) -> Result<Body, ReportError> {
        match std::mem::replace(&mut self.mode, BlockMode::Normal) {
            BlockMode::Code { opened_at } => match self.options.fence_policy {
                FencePolicy::Error => {
                    return Err(ReportError::UnterminatedFence { line: opened_at })
                }
                FencePolicy::Close => {
                    warn!("code fence opened on line {opened_at} is never closed, closing it at end of document");
                    self.out.push("</code></pre>\n\n".to_string());
                }
            },
            BlockMode::Table(buffer) => self.out.push(buffer.render()),
            BlockMode::Normal => {}
        }
        self.list.close(&mut self.out);
        self.close_section();

        let title = self
            .title
            .unwrap_or_else(|| self.options.page.title.clone());

        Ok(Body {
            title,
            html: self.out.concat(),
            outline: self.outline,
            galleries: self.galleries,
        })
    }
}
