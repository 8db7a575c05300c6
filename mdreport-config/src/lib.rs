//! Configuration loader for mdreport.
//!
//! `defaults/mdreport.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer a
//! project file and CLI overrides on top via [`Loader`] before deserializing
//! into [`ReportConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdreport_core::figures::{SectionFigures, SectionRegistry};
use mdreport_core::{FencePolicy, PageOptions, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/mdreport.default.toml");

/// Name of the project file picked up from the working directory.
pub const PROJECT_FILE: &str = "mdreport.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub figures: FiguresConfig,
    pub page: PageConfig,
    pub convert: ConvertConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub markdown: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub html: PathBuf,
}

/// Where figures live and which sections they belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct FiguresConfig {
    pub root: PathBuf,
    /// Empty means "derive from the output location".
    pub url_prefix: String,
    pub extensions: Vec<String>,
    pub sections: Vec<SectionFigures>,
}

impl FiguresConfig {
    pub fn registry(&self) -> SectionRegistry {
        SectionRegistry::new(self.sections.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub lang: String,
    pub toc_title: String,
    pub stylesheet: String,
    pub font_url: String,
    pub footer: Vec<String>,
    pub gallery_titles: bool,
    /// Stylesheet whose contents are appended to the embedded CSS. Reading it
    /// is left to the caller.
    #[serde(default)]
    pub custom_css: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_code_language: String,
    pub metadata_prefixes: Vec<String>,
    pub fence_policy: FencePolicy,
    /// Empty means any numbered level-3 heading switches section.
    pub section_keyword: String,
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl From<&PageConfig> for PageOptions {
    fn from(config: &PageConfig) -> Self {
        PageOptions {
            title: config.title.clone(),
            lang: config.lang.clone(),
            toc_title: config.toc_title.clone(),
            stylesheet: non_empty(&config.stylesheet),
            font_url: non_empty(&config.font_url),
            custom_css: None,
            footer: config.footer.clone(),
        }
    }
}

impl From<&ReportConfig> for RenderOptions {
    fn from(config: &ReportConfig) -> Self {
        RenderOptions {
            sections: config.figures.registry(),
            default_code_language: config.convert.default_code_language.clone(),
            metadata_prefixes: config.convert.metadata_prefixes.clone(),
            fence_policy: config.convert.fence_policy,
            gallery_titles: config.page.gallery_titles,
            section_keyword: non_empty(&config.convert.section_keyword),
            page: PageOptions::from(&config.page),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ReportConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ReportConfig, ConfigError> {
    Loader::new().build()
}

/// The embedded defaults, as shipped.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
