//! Figure discovery
//!
//! Figures are image files whose name starts with a configured prefix, either
//! loose under the figure root or inside a prefix-named subdirectory:
//!
//! ```text
//! figures/
//! ├── paso1_overview.png          loose, matches "paso1"
//! └── paso1_panels/
//!     └── panel_a.png             nested, matches "paso1" through its directory
//! ```
//!
//! The transformer only sees the [`FigureSource`] trait, so rendering stays
//! pure given its inputs; [`FigureTree`] is the filesystem implementation.
//!
//! A figure that disappears between scan and page load is not an error here:
//! the gallery still references it and the browser-side fallback marks it.

mod naming;
mod registry;
mod tree;

pub use naming::display_name;
pub use registry::{SectionFigures, SectionRegistry};
pub use tree::{relative_url, FigureTree};

use crate::error::ReportError;
use serde::Serialize;
use std::collections::HashSet;

/// One discovered image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Figure {
    /// URL placed in `src`, relative to the generated page.
    pub path: String,
    /// Caption shown under the image.
    pub name: String,
    /// Bare file name.
    pub file: String,
    pub placement: Placement,
}

/// Where a figure was found relative to the figure root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placement {
    Loose,
    Nested { directory: String },
}

impl Figure {
    /// Build a descriptor from a file name and its (optional) parent directory.
    pub fn new(url_prefix: &str, directory: Option<&str>, file: &str) -> Self {
        let stem = file.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file);
        let mut path = String::new();
        let prefix = url_prefix.trim_end_matches('/');
        if !prefix.is_empty() {
            path.push_str(prefix);
            path.push('/');
        }
        if let Some(dir) = directory {
            path.push_str(dir);
            path.push('/');
        }
        path.push_str(file);

        Self {
            path,
            name: display_name(stem),
            file: file.to_string(),
            placement: match directory {
                Some(dir) => Placement::Nested {
                    directory: dir.to_string(),
                },
                None => Placement::Loose,
            },
        }
    }
}

/// Anything that can answer "which figures start with this prefix".
pub trait FigureSource {
    /// Figures matching `prefix`, in a stable order.
    fn find(&self, prefix: &str) -> Result<Vec<Figure>, ReportError>;
}

/// All figures for a list of prefixes, in prefix order.
///
/// Repeated prefixes are queried once and a file matched by two prefixes
/// (`paso1` and `paso10` both match `paso10_x.png`) is listed once.
pub fn figures_for(
    source: &dyn FigureSource,
    prefixes: &[String],
) -> Result<Vec<Figure>, ReportError> {
    let mut seen_prefixes = HashSet::new();
    let mut seen_paths = HashSet::new();
    let mut figures = Vec::new();

    for prefix in prefixes {
        if !seen_prefixes.insert(prefix.as_str()) {
            continue;
        }
        for figure in source.find(prefix)? {
            if seen_paths.insert(figure.path.clone()) {
                figures.push(figure);
            }
        }
    }

    Ok(figures)
}

/// Figures found for one registry section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInventory {
    pub section: String,
    pub figures: Vec<Figure>,
}

/// Scan every registry section, in registry order.
pub fn inventory(
    registry: &SectionRegistry,
    source: &dyn FigureSource,
) -> Result<Vec<SectionInventory>, ReportError> {
    registry
        .iter()
        .map(|entry| {
            Ok(SectionInventory {
                section: entry.id.clone(),
                figures: figures_for(source, &entry.prefixes)?,
            })
        })
        .collect()
}
