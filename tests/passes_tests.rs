//! Integration tests for fix, sort, and clean

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_project, linktags_cmd, read, LINKS_PAGE};

#[test]
fn test_fix_reports_each_repair() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Underscores replaced: 1"))
        .stdout(predicate::str::contains("Type tags added: 1"))
        .stdout(predicate::str::contains("Untagged links tagged: 1"))
        .stdout(predicate::str::contains("Total fixes: 3"));

    let content = read(temp.path(), "links.md");
    assert!(content.contains("Team-Ops"));
    assert!(!content.contains("Team_Ops"));
    assert!(content.contains(r#"target="_blank" data-tags="museobotero museum">"#));
}

#[test]
fn test_fix_dry_run_leaves_file() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .args(["fix", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry run, nothing written)"));

    assert_eq!(read(temp.path(), "links.md"), LINKS_PAGE);
}

#[test]
fn test_sort_orders_grid_alphabetically() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted 1 of 1 link grids"));

    let content = read(temp.path(), "links.md");
    let alcaldia = content.find("Alcaldía de Bogotá").unwrap();
    let embassy = content.find("Embassy of Mexico").unwrap();
    let museo = content.find("Museo Botero").unwrap();
    assert!(alcaldia < embassy && embassy < museo);

    // Indentation and the code example survive the reorder
    assert!(content.contains("\n    <a href=\"https://instagram.com/alcaldiabogota\""));
    assert!(content.ends_with("`<a href=\"https://example.com\" data-tags=\"x\">Example</a>`\n"));
}

#[test]
fn test_sort_skips_grid_with_other_markup() {
    let page = r#"<div class="link-grid">
    <a href="https://b.com">B</a>
    <span>note</span>
    <a href="https://a.com">A</a>
</div>
"#;
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), page);

    linktags_cmd()
        .current_dir(temp.path())
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted 0 of 1 link grids"))
        .stdout(predicate::str::contains("links.md:1"));

    assert_eq!(read(temp.path(), "links.md"), page);
}

#[test]
fn test_clean_drops_location_suffix() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned location text from 1 of 3 links"));

    let content = read(temp.path(), "links.md");
    assert!(content.contains(">🇨🇴 Museo Botero</a>"));
    assert!(!content.contains('•'));
}
