//! Structural properties over generated documents.

use crate::common::{options_with, MemoryFigures};
use mdreport_core::{render_body, FencePolicy, RenderOptions};
use proptest::prelude::*;

const LINES: &[&str] = &[
    "",
    "# Top",
    "## Results Phase 1",
    "## 3.1 Numbered section",
    "### 3.1 Step 1",
    "### 3.2 Step 2",
    "### Notes",
    "#### Detail",
    "- item",
    "* other item",
    "1. first",
    "2. second",
    "| a | b |",
    "|---|---|",
    "```",
    "```python",
    "---",
    "plain text with **bold** and *italic*",
    "**Date:** today",
    "see `code` here",
];

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(LINES), 0..40)
        .prop_map(|lines| format!("# Title\n{}\n", lines.join("\n")))
}

fn options() -> RenderOptions {
    options_with(&[("3.1", &["paso1"]), ("3.2", &["paso2"])])
        .with_fence_policy(FencePolicy::Close)
}

fn figures() -> MemoryFigures {
    MemoryFigures::new(&["paso1_overview.png", "paso2_panels/a.png"])
}

fn balanced(html: &str, open: &str, close: &str) -> bool {
    html.matches(open).count() == html.matches(close).count()
}

proptest! {
    #[test]
    fn containers_are_balanced(source in document()) {
        let body = render_body(&source, &options(), &figures()).unwrap();
        prop_assert!(balanced(&body.html, "<section ", "</section>"));
        prop_assert!(balanced(&body.html, "<ul ", "</ul>"));
        prop_assert!(balanced(&body.html, "<ol ", "</ol>"));
        prop_assert!(balanced(&body.html, "<pre ", "</pre>"));
        prop_assert!(balanced(&body.html, "<table ", "</table>"));
    }

    #[test]
    fn rendering_is_deterministic(source in document()) {
        let first = render_body(&source, &options(), &figures()).unwrap();
        let second = render_body(&source, &options(), &figures()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_gallery_per_section(source in document()) {
        let body = render_body(&source, &options(), &figures()).unwrap();
        prop_assert!(body.html.matches("Figures for Section 3.1").count() <= 1);
        prop_assert!(body.html.matches("Figures for Section 3.2").count() <= 1);
    }

    #[test]
    fn separator_rows_are_dropped(separators in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut source = String::from("# T\n| h1 | h2 |\n");
        for is_separator in &separators {
            source.push_str(if *is_separator { "|---|:--:|\n" } else { "| x | y |\n" });
        }
        let body = render_body(&source, &options(), &figures()).unwrap();

        let data_rows = separators.iter().filter(|s| !**s).count();
        prop_assert_eq!(body.html.matches("<thead><tr>").count(), 1);
        prop_assert_eq!(body.html.matches("<tr>\n  <td>").count(), data_rows);
    }
}
