//! Pipe table buffering and rendering.

use super::inline::convert_bold;

/// Raw table rows collected while the transformer is in table mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBuffer {
    rows: Vec<String>,
}

impl TableBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_with(row: &str) -> Self {
        let mut buffer = Self::new();
        buffer.push(row);
        buffer
    }

    pub fn push(&mut self, row: &str) {
        self.rows.push(row.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the buffered rows.
    ///
    /// The first row is always the header. Separator rows anywhere after it
    /// are dropped; every other row becomes one body row.
    pub fn render(&self) -> String {
        let mut html = String::from("<div class=\"table-wrapper\"><table class=\"data-table\">\n");
        let mut rows = self.rows.iter();

        if let Some(header) = rows.next() {
            html.push_str("<thead><tr>\n");
            for cell in split_cells(header) {
                html.push_str(&format!("  <th>{}</th>\n", convert_bold(cell)));
            }
            html.push_str("</tr></thead>\n");
        }

        html.push_str("<tbody>\n");
        for row in rows.filter(|row| !is_separator(row)) {
            html.push_str("<tr>\n");
            for cell in split_cells(row) {
                html.push_str(&format!("  <td>{}</td>\n", convert_bold(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody></table></div>\n\n");
        html
    }
}

/// Cells of a pipe row, without the outer pipes and trimmed.
pub fn split_cells(row: &str) -> Vec<&str> {
    let inner = row.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// `|---|:--:|` style rows: only pipes, dashes, colons and spaces, with at
/// least one dash.
pub fn is_separator(row: &str) -> bool {
    let trimmed = row.trim();
    trimmed.contains('-')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
}
