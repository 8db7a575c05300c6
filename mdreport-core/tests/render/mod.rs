//! Transformer tests
//!
//! End-to-end checks of Markdown → HTML through the public API, driven by an
//! in-memory figure source.

mod galleries;
mod properties;
