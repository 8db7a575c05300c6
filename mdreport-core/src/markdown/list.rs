//! Flat list buffering.
//!
//! Lists are tracked with an explicit open/closed state instead of peeking at
//! neighbouring lines: an item opens a container (or switches it when the
//! kind changes), any other line closes it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul class=\"styled-list\">\n",
            ListKind::Ordered => "<ol class=\"styled-list\">\n",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>\n",
            ListKind::Ordered => "</ol>\n",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    open: Option<ListKind>,
}

impl ListState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Emit one `<li>`, opening or switching the container as needed.
    /// `content` must already be converted to HTML.
    pub fn item(&mut self, kind: ListKind, content: &str, out: &mut Vec<String>) {
        if self.open != Some(kind) {
            self.close(out);
            out.push(kind.open_tag().to_string());
            self.open = Some(kind);
        }
        out.push(format!("<li>{content}</li>\n"));
    }

    pub fn close(&mut self, out: &mut Vec<String>) {
        if let Some(kind) = self.open.take() {
            out.push(kind.close_tag().to_string());
        }
    }
}
