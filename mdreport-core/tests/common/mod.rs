//! Shared helpers: an in-memory figure source and option builders.

use mdreport_core::figures::{Figure, FigureSource, SectionRegistry};
use mdreport_core::{RenderOptions, ReportError};

/// Figures given as `file.png` or `dir/file.png` relative to a `figures/` root.
pub struct MemoryFigures {
    figures: Vec<Figure>,
}

impl MemoryFigures {
    pub fn new(paths: &[&str]) -> Self {
        let figures = paths
            .iter()
            .map(|path| match path.split_once('/') {
                Some((dir, file)) => Figure::new("figures", Some(dir), file),
                None => Figure::new("figures", None, path),
            })
            .collect();
        Self { figures }
    }

    pub fn empty() -> Self {
        Self {
            figures: Vec::new(),
        }
    }
}

impl FigureSource for MemoryFigures {
    fn find(&self, prefix: &str) -> Result<Vec<Figure>, ReportError> {
        Ok(self
            .figures
            .iter()
            .filter(|figure| match &figure.placement {
                mdreport_core::figures::Placement::Loose => figure.file.starts_with(prefix),
                mdreport_core::figures::Placement::Nested { directory } => {
                    directory.starts_with(prefix)
                }
            })
            .cloned()
            .collect())
    }
}

/// Options with the given `(section, prefixes)` registry and defaults elsewhere.
pub fn options_with(sections: &[(&str, &[&str])]) -> RenderOptions {
    RenderOptions::new(SectionRegistry::from_pairs(sections.iter().copied()))
}
