use crate::error::ReportError;
use crate::figures::SectionRegistry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do with a code fence that is still open at end of document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FencePolicy {
    /// Fail the conversion, naming the line of the opening fence.
    #[default]
    Error,
    /// Close the block at end of document and keep going.
    Close,
}

impl FromStr for FencePolicy {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(FencePolicy::Error),
            "close" => Ok(FencePolicy::Close),
            other => Err(ReportError::InvalidOption(format!(
                "unknown fence policy '{other}' (expected 'error' or 'close')"
            ))),
        }
    }
}

/// Options for the page shell around the converted body.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// `<title>` used when the document has no title line.
    pub title: String,
    pub lang: String,
    pub toc_title: String,
    /// Extra stylesheet linked after the embedded CSS.
    pub stylesheet: Option<String>,
    pub font_url: Option<String>,
    /// CSS appended after the embedded stylesheet.
    pub custom_css: Option<String>,
    /// Footer paragraphs; inline markup is converted.
    pub footer: Vec<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Report".to_string(),
            lang: "en".to_string(),
            toc_title: "Table of Contents".to_string(),
            stylesheet: None,
            font_url: None,
            custom_css: None,
            footer: Vec::new(),
        }
    }
}

/// Everything the transformer needs besides the source text and figures.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub sections: SectionRegistry,
    /// Language class used for fences without an info string.
    pub default_code_language: String,
    /// Lines starting with one of these become `<p class="metadata">`.
    pub metadata_prefixes: Vec<String>,
    pub fence_policy: FencePolicy,
    /// Emit a `Figures for Section N.M` heading inside each gallery.
    pub gallery_titles: bool,
    /// A level-3 heading only moves to its `N.M` section when it contains this
    /// word (case-insensitive). `None` lets any numbered level-3 heading do so.
    pub section_keyword: Option<String>,
    pub page: PageOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sections: SectionRegistry::default(),
            default_code_language: "r".to_string(),
            metadata_prefixes: vec![
                "**Authors:**".to_string(),
                "**Date:**".to_string(),
                "**Dataset:**".to_string(),
            ],
            fence_policy: FencePolicy::Error,
            gallery_titles: true,
            section_keyword: Some("step".to_string()),
            page: PageOptions::default(),
        }
    }
}

impl RenderOptions {
    pub fn new(sections: SectionRegistry) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    pub fn with_fence_policy(mut self, policy: FencePolicy) -> Self {
        self.fence_policy = policy;
        self
    }

    pub fn with_page(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }
}
