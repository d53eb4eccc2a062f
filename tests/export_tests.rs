//! Integration tests for export-csv, youtube-map, and analyze

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_project, linktags_cmd, read, LINKS_PAGE};

#[test]
fn test_export_csv_writes_header_and_rows() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .args(["export-csv", "-o", "out.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 links to out.csv"));

    let csv = read(temp.path(), "out.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Name,Category,Instagram_Username,Instagram_URL,YouTube_URL,Website_URL,Tags"
    );
    assert_eq!(lines.len(), 4);
    assert!(csv.contains(
        "alcaldiabogota,https://instagram.com/alcaldiabogota,https://www.youtube.com/@AlcaldiaBogota,https://bogota.gov.co/,government Team_Ops"
    ));
}

#[test]
fn test_export_csv_uses_configured_path() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .args(["config", "csv_output", "exports/directory.csv"])
        .assert()
        .success();

    linktags_cmd()
        .current_dir(temp.path())
        .arg("export-csv")
        .assert()
        .success();

    assert!(temp.path().join("exports/directory.csv").exists());
}

#[test]
fn test_youtube_map_rewrites_script() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);
    fs::write(
        temp.path().join("menu.js"),
        "document.addEventListener('DOMContentLoaded', () => {\n    const youtubeMap = {\n        'old': 'https://www.youtube.com/@old'\n    };\n});\n",
    )
    .unwrap();

    linktags_cmd()
        .current_dir(temp.path())
        .args(["youtube-map", "--script", "menu.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let script = read(temp.path(), "menu.js");
    assert!(!script.contains("@old"));
    assert!(script.contains("        'museobotero': 'https://www.youtube.com/@museobotero'"));
    assert!(script.starts_with("document.addEventListener"));
    assert!(script.ends_with("    };\n});\n"));

    linktags_cmd()
        .current_dir(temp.path())
        .args(["youtube-map", "--script", "menu.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already current:"));
}

#[test]
fn test_youtube_map_missing_marker_exits_with_code_4() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);
    fs::write(temp.path().join("menu.js"), "const other = {};\n").unwrap();

    linktags_cmd()
        .current_dir(temp.path())
        .args(["youtube-map", "--script", "menu.js"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("const youtubeMap ="));

    assert_eq!(read(temp.path(), "menu.js"), "const other = {};\n");
}

#[test]
fn test_analyze_reports_and_writes_usernames() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .args(["analyze", "--usernames"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total links: 3"))
        .stdout(predicate::str::contains("Unique usernames: 3"))
        .stdout(predicate::str::contains("Categories:"))
        .stdout(predicate::str::contains("Countries:"))
        .stdout(predicate::str::contains("Saved 3 usernames to"));

    assert_eq!(
        read(temp.path(), "instagram_usernames.txt"),
        "alcaldiabogota\nembamexcol\nmuseobotero\n"
    );
}

#[test]
fn test_analyze_without_flag_writes_nothing() {
    let temp = TempDir::new().unwrap();
    init_project(temp.path(), LINKS_PAGE);

    linktags_cmd()
        .current_dir(temp.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved").not());

    assert!(!temp.path().join("instagram_usernames.txt").exists());
}
