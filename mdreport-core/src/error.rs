//! Error types for report rendering

use std::fmt;

/// Errors that can occur while rendering a report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A code fence was opened and never closed (1-based line of the opening fence)
    UnterminatedFence { line: usize },
    /// The figure tree could not be read
    FigureScan(String),
    /// An option value could not be understood
    InvalidOption(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::UnterminatedFence { line } => {
                write!(f, "Code fence opened on line {line} is never closed")
            }
            ReportError::FigureScan(msg) => write!(f, "Figure scan error: {msg}"),
            ReportError::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}
