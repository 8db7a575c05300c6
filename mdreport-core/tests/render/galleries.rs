//! Gallery placement: which headings get figures, and how many times.

use crate::common::{options_with, MemoryFigures};
use mdreport_core::html::GalleryRecord;
use mdreport_core::render_body;

fn gallery_count(html: &str) -> usize {
    html.matches("<div class=\"figure-gallery\">").count()
}

#[test]
fn test_gallery_follows_its_heading() {
    let figures = MemoryFigures::new(&["paso1_overview.png", "paso2_volcano.png"]);
    let options = options_with(&[("3.1", &["paso1"]), ("3.2", &["paso2"])]);
    let source = "# T\n## 3. Results\n### 3.1 Step 1\nintro\n### 3.2 Step 2\nmore\n";

    let body = render_body(source, &options, &figures).unwrap();

    assert_eq!(gallery_count(&body.html), 2);
    let step1 = body.html.find("<h3 id=\"3-1-step-1\">").unwrap();
    let overview = body.html.find("paso1_overview.png").unwrap();
    let step2 = body.html.find("<h3 id=\"3-2-step-2\">").unwrap();
    let volcano = body.html.find("paso2_volcano.png").unwrap();
    assert!(step1 < overview && overview < step2 && step2 < volcano);
}

#[test]
fn test_one_gallery_per_section() {
    let figures = MemoryFigures::new(&["paso1_overview.png"]);
    let options = options_with(&[("3.1", &["paso1"])]);
    let source = "# T\n### 3.1 Step 1\n### Details\n### Summary for 3.1\n";

    let body = render_body(source, &options, &figures).unwrap();

    assert_eq!(gallery_count(&body.html), 1);
    assert_eq!(body.figure_count(), 1);
}

#[test]
fn test_section_without_figures_emits_nothing() {
    let options = options_with(&[("3.1", &["paso1"])]);
    let body = render_body("# T\n### 3.1 Step 1\n", &options, &MemoryFigures::empty()).unwrap();

    assert_eq!(gallery_count(&body.html), 0);
    assert!(!body.html.contains("Figures for Section"));
    assert!(body.galleries.is_empty());
}

#[test]
fn test_level_two_number_applies_to_following_subheading() {
    let figures = MemoryFigures::new(&["paso5_heatmap.png"]);
    let options = options_with(&[("4.1", &["paso5"])]);
    let source = "# T\n## 4.1 Clustering\n### Method\n";

    let body = render_body(source, &options, &figures).unwrap();

    let method = body.html.find("<h3 id=\"method\">").unwrap();
    let gallery = body.html.find("figure-gallery").unwrap();
    assert!(method < gallery);
}

#[test]
fn test_level_two_without_number_resets_section() {
    let figures = MemoryFigures::new(&["paso1_overview.png"]);
    let options = options_with(&[("3.1", &["paso1"])]);
    let source = "# T\n## 3.1 Step\n## Discussion\n### Notes\n";

    let body = render_body(source, &options, &figures).unwrap();

    assert_eq!(gallery_count(&body.html), 0);
}

#[test]
fn test_multiple_prefixes_and_nested_directories() {
    let figures = MemoryFigures::new(&[
        "paso9_scores.png",
        "paso10_x.png",
        "paso10_panels/panel_a.png",
    ]);
    let options = options_with(&[("5.3", &["paso9", "paso10"])]);

    let body = render_body("# T\n### 5.3 Step 9 and 10: Integration\n", &options, &figures).unwrap();

    assert_eq!(
        body.galleries,
        vec![GalleryRecord {
            section: "5.3".to_string(),
            figures: 3,
        }]
    );
    assert!(body
        .html
        .contains("src=\"figures/paso10_panels/panel_a.png\""));
    assert_eq!(body.html.matches("paso10_x.png").count(), 1);
}

#[test]
fn test_gallery_titles_can_be_disabled() {
    let figures = MemoryFigures::new(&["paso1_overview.png"]);
    let mut options = options_with(&[("3.1", &["paso1"])]);
    options.gallery_titles = false;

    let body = render_body("# T\n### 3.1 Step 1\n", &options, &figures).unwrap();

    assert_eq!(gallery_count(&body.html), 1);
    assert!(!body.html.contains("gallery-title"));
}

#[test]
fn test_numbered_reference_does_not_steal_gallery() {
    let figures = MemoryFigures::new(&["paso1_overview.png", "paso2_volcano.png"]);
    let options = options_with(&[("3.1", &["paso1"]), ("3.2", &["paso2"])]);
    let source = "# T\n### 3.1 Step 1\n### Comparison with Table 3.2\n### 3.2 Step 2\n";

    let body = render_body(source, &options, &figures).unwrap();

    let comparison = body.html.find("<h3 id=\"comparison-with-table-3-2\">").unwrap();
    let step2 = body.html.find("<h3 id=\"3-2-step-2\">").unwrap();
    let volcano = body.html.find("paso2_volcano.png").unwrap();
    assert!(comparison < step2 && step2 < volcano);
    assert_eq!(gallery_count(&body.html), 2);
}

#[test]
fn test_section_keyword_can_be_disabled() {
    let figures = MemoryFigures::new(&["paso1_overview.png"]);
    let mut options = options_with(&[("3.1", &["paso1"])]);
    options.section_keyword = None;

    let body = render_body("# T\n### 3.1 Overview\n", &options, &figures).unwrap();

    assert_eq!(gallery_count(&body.html), 1);
}
