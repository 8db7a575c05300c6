use super::{Figure, FigureSource};
use crate::error::ReportError;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Read-only figure lookup over a directory on disk.
#[derive(Debug, Clone)]
pub struct FigureTree {
    root: PathBuf,
    url_prefix: String,
    extensions: Vec<String>,
}

impl FigureTree {
    /// Figures under `root`, referenced as `figures/...`, PNG only.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            url_prefix: "figures".to_string(),
            extensions: vec!["png".to_string()],
        }
    }

    /// Prefix placed before every figure path in the generated page.
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Accepted file extensions, compared case-insensitively.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }
}

impl FigureSource for FigureTree {
    fn find(&self, prefix: &str) -> Result<Vec<Figure>, ReportError> {
        if !self.root.is_dir() {
            debug!("figure root {} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        let mut loose = Vec::new();
        let mut nested = Vec::new();

        // Depth 1: loose files and candidate directories. Depth 2: files inside
        // directories whose own name carries the prefix.
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| keep_entry(e, prefix));

        for entry in walker {
            let entry = entry.map_err(|err| ReportError::FigureScan(err.to_string()))?;
            if !entry.file_type().is_file() || !self.accepts(entry.path()) {
                continue;
            }
            let file = file_name(&entry);
            match entry.depth() {
                1 if file.starts_with(prefix) => {
                    loose.push(Figure::new(&self.url_prefix, None, &file));
                }
                2 => {
                    let directory = entry
                        .path()
                        .parent()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    nested.push(Figure::new(&self.url_prefix, Some(&directory), &file));
                }
                _ => {}
            }
        }

        debug!(
            "prefix {prefix}: {} loose, {} nested under {}",
            loose.len(),
            nested.len(),
            self.root.display()
        );

        loose.extend(nested);
        Ok(loose)
    }
}

fn file_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

/// Skip hidden entries and only descend into directories named after the prefix.
fn keep_entry(entry: &DirEntry, prefix: &str) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = file_name(entry);
    if name.starts_with('.') {
        return false;
    }
    if entry.depth() == 1 && entry.file_type().is_dir() {
        return name.starts_with(prefix);
    }
    true
}

/// `target` expressed relative to `base`, with `/` separators, for use in URLs.
///
/// Returns `None` when no relative path exists (e.g. one path is absolute and
/// the other is not, or `base` climbs out with `..`).
pub fn relative_url(target: &Path, base: &Path) -> Option<String> {
    let relative = pathdiff::diff_paths(target, base)?;
    if relative.has_root() {
        return None;
    }
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
