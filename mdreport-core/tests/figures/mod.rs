//! Figure discovery against real directory trees.

use mdreport_core::figures::{inventory, FigureSource, FigureTree, Placement, SectionRegistry};
use mdreport_core::{render, RenderOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"\x89PNG").unwrap();
}

fn tree_with(files: &[&str]) -> (TempDir, FigureTree) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("figures");
    fs::create_dir_all(&root).unwrap();
    for file in files {
        touch(&root, file);
    }
    let tree = FigureTree::new(&root);
    (dir, tree)
}

#[test]
fn test_loose_then_nested_sorted_by_name() {
    let (_dir, tree) = tree_with(&[
        "paso1_zeta.png",
        "paso1_alpha.png",
        "paso1_panels/b.png",
        "paso1_panels/a.png",
        "paso2_other.png",
    ]);

    let found = tree.find("paso1").unwrap();
    let paths: Vec<&str> = found.iter().map(|f| f.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "figures/paso1_alpha.png",
            "figures/paso1_zeta.png",
            "figures/paso1_panels/a.png",
            "figures/paso1_panels/b.png",
        ]
    );
    assert_eq!(found[0].name, "Paso1 Alpha");
    assert_eq!(
        found[2].placement,
        Placement::Nested {
            directory: "paso1_panels".to_string()
        }
    );
}

#[test]
fn test_extension_filter_and_hidden_files() {
    let (_dir, tree) = tree_with(&[
        "paso3_plot.png",
        "paso3_plot.PNG",
        "paso3_table.csv",
        ".paso3_hidden.png",
        "paso3_dir/.hidden.png",
    ]);

    let found = tree.find("paso3").unwrap();
    let files: Vec<&str> = found.iter().map(|f| f.file.as_str()).collect();

    assert_eq!(files, vec!["paso3_plot.PNG", "paso3_plot.png"]);
}

#[test]
fn test_extra_extensions() {
    let (_dir, tree) = tree_with(&["paso4_a.png", "paso4_b.svg", "paso4_c.jpg"]);
    let tree = tree.with_extensions([".png", "SVG"]);

    let files: Vec<String> = tree
        .find("paso4")
        .unwrap()
        .into_iter()
        .map(|f| f.file)
        .collect();

    assert_eq!(files, vec!["paso4_a.png", "paso4_b.svg"]);
}

#[test]
fn test_files_in_unrelated_directories_are_ignored() {
    let (_dir, tree) = tree_with(&["misc/paso1_overview.png", "paso1_kept.png"]);

    let found = tree.find("paso1").unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file, "paso1_kept.png");
}

#[test]
fn test_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let tree = FigureTree::new(dir.path().join("nope"));
    assert!(tree.find("paso1").unwrap().is_empty());
}

#[test]
fn test_url_prefix() {
    let (_dir, tree) = tree_with(&["paso1_overview.png"]);
    let tree = tree.with_url_prefix("../assets/figures/");

    let found = tree.find("paso1").unwrap();

    assert_eq!(found[0].path, "../assets/figures/paso1_overview.png");
}

#[test]
fn test_inventory_in_registry_order() {
    let (_dir, tree) = tree_with(&["paso2_a.png", "paso1_a.png"]);
    let registry = SectionRegistry::from_pairs([
        ("3.2", &["paso2"][..]),
        ("3.1", &["paso1"][..]),
        ("3.3", &["paso3"][..]),
    ]);

    let sections = inventory(&registry, &tree).unwrap();

    let summary: Vec<(&str, usize)> = sections
        .iter()
        .map(|s| (s.section.as_str(), s.figures.len()))
        .collect();
    assert_eq!(summary, vec![("3.2", 1), ("3.1", 1), ("3.3", 0)]);
}

#[test]
fn test_render_against_directory_is_stable() {
    let (_dir, tree) = tree_with(&["paso1_overview.png"]);
    let options = RenderOptions::new(SectionRegistry::from_pairs([("3.1", ["paso1"])]));
    let source = "# Report\n## 3. Results\n### 3.1 Step 1\n### 3.2 Step 2\n";

    let first = render(source, &options, &tree).unwrap();
    let second = render(source, &options, &tree).unwrap();

    assert_eq!(first.html.matches("<img ").count(), 1);
    assert!(first.html.contains("src=\"figures/paso1_overview.png\""));
    assert_eq!(first.html.matches("class=\"figure-gallery\"").count(), 1);
    assert!(first.html.contains("1 figure included"));
    assert_eq!(first.html, second.html);
}
