//! Markdown scientific reports to a single HTML page
//!
//!     This crate turns a hand-written Markdown report into one self-contained HTML page and
//!     splices image galleries, found on disk, right after the headings they belong to.
//!
//!     This is a pure lib: it powers mdreport-cli but assumes no shell. Nothing here prints, reads
//!     environment variables or writes files. The only filesystem access is the read-only
//!     figure scan behind [`figures::FigureTree`], and the transformer reaches it through the
//!     [`figures::FigureSource`] trait so it can be driven from memory in tests.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── markdown            # Line classification, inline markup, table/list buffers
//!     ├── figures             # Figure descriptors, section registry, directory scan
//!     ├── html
//!     │   ├── transformer.rs  # The line-driven state machine
//!     │   ├── gallery.rs      # Gallery markup
//!     │   ├── page.rs         # Page shell, TOC, footer, embedded CSS/JS
//!     │   └── options.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common              # In-memory figure source, fixture helpers
//!     ├── render              # Transformer behaviour, snapshots, properties
//!     └── figures             # Filesystem scan against temp trees
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs declares them.
//!
//! Not a Markdown parser
//!
//!     The input is a fixed, manually authored report. Each line is classified on its own and a
//!     small state value (normal / code / table, plus list and section flags) decides the output.
//!     There is no tree, no nesting and no error recovery beyond flushing open buffers at the end
//!     of the document. Unterminated code fences are the one malformation that is reported, see
//!     [`html::FencePolicy`].
//!
pub mod error;
pub mod figures;
pub mod html;
pub mod markdown;

pub use error::ReportError;
pub use figures::{Figure, FigureSource, FigureTree, SectionRegistry};
pub use html::{render, render_body, FencePolicy, PageOptions, RenderOptions, Rendered};
