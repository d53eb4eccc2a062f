//! Sort and clean use cases

use crate::application::workspace::Workspace;
use crate::application::write::{commit, WriteOptions};
use crate::domain::layout::{clean_locations, sort_link_grids};
use crate::error::Result;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortReport {
    pub scanned_files: usize,
    pub grids: usize,
    pub reordered: usize,
    pub changed_files: usize,
    /// Grids left alone, by file and 1-based line
    pub skipped: Vec<(PathBuf, usize)>,
    pub dry_run: bool,
}

pub fn sort_links(workspace: &Workspace, options: WriteOptions) -> Result<SortReport> {
    let files = workspace.load()?;
    let mut report = SortReport {
        scanned_files: files.len(),
        dry_run: options.dry_run,
        ..SortReport::default()
    };

    for file in &files {
        let outcome = sort_link_grids(&file.content);
        report.grids += outcome.grids;
        report.reordered += outcome.reordered;

        for line in &outcome.skipped {
            warn!(path = %file.path.display(), line, "grid holds more than links, left unsorted");
            report.skipped.push((file.path.clone(), *line));
        }

        if commit(&file.path, &file.content, &outcome.content, options)? {
            report.changed_files += 1;
        }
    }

    info!(grids = report.grids, reordered = report.reordered, "sorted link grids");
    Ok(report)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub scanned_files: usize,
    pub records: usize,
    pub cleaned: usize,
    pub changed_files: usize,
    pub dry_run: bool,
}

pub fn clean(workspace: &Workspace, options: WriteOptions) -> Result<CleanReport> {
    let files = workspace.load()?;
    let mut report = CleanReport {
        scanned_files: files.len(),
        dry_run: options.dry_run,
        ..CleanReport::default()
    };

    for file in &files {
        let outcome = clean_locations(&file.content);
        report.records += outcome.records;
        report.cleaned += outcome.cleaned;
        if commit(&file.path, &file.content, &outcome.content, options)? {
            report.changed_files += 1;
        }
    }

    info!(cleaned = report.cleaned, "cleaned display text");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir, content: &str) -> Workspace {
        fs::write(temp.path().join("links.md"), content).unwrap();
        Workspace::from_config(temp.path().to_path_buf(), Config::new("links.md".into())).unwrap()
    }

    #[test]
    fn sort_reports_skipped_grids() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(
            &temp,
            "<div class=\"link-grid\">\n<a href=\"https://b.com\">B</a>\n<a href=\"https://a.com\">A</a>\n</div>\n\n<div class=\"link-grid\">\n<p>x</p>\n</div>\n",
        );

        let report = sort_links(&ws, WriteOptions::default()).unwrap();
        assert_eq!(report.grids, 2);
        assert_eq!(report.reordered, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].1, 6);

        let written = fs::read_to_string(temp.path().join("links.md")).unwrap();
        assert!(written.find("https://a.com") < written.find("https://b.com"));
    }

    #[test]
    fn clean_counts_records() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, "<a href=\"https://x.com\">Teatro Colón • Bogotá</a>\n");

        let report = clean(&ws, WriteOptions::default()).unwrap();
        assert_eq!(report.cleaned, 1);
        assert_eq!(report.changed_files, 1);
        assert!(fs::read_to_string(temp.path().join("links.md"))
            .unwrap()
            .contains(">Teatro Colón</a>"));
    }
}
