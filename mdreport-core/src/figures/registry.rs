use serde::{Deserialize, Serialize};

/// Figure prefixes attached to one numbered section (e.g. `3.1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFigures {
    pub id: String,
    pub prefixes: Vec<String>,
}

/// Ordered mapping from section number to figure prefixes.
///
/// Consulted, never mutated, while rendering. If an id is listed twice the
/// first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: Vec<SectionFigures>,
}

impl SectionRegistry {
    pub fn new(entries: Vec<SectionFigures>) -> Self {
        Self { entries }
    }

    /// Convenience constructor, mostly for tests and small callers.
    pub fn from_pairs<I, S, P, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: AsRef<str>,
        P: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(id, prefixes)| SectionFigures {
                id: id.as_ref().to_string(),
                prefixes: prefixes
                    .into_iter()
                    .map(|p| p.as_ref().to_string())
                    .collect(),
            })
            .collect();
        Self { entries }
    }

    pub fn prefixes_for(&self, section: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.id == section)
            .map(|entry| entry.prefixes.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionFigures> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<SectionFigures>> for SectionRegistry {
    fn from(entries: Vec<SectionFigures>) -> Self {
        Self::new(entries)
    }
}
