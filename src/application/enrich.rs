//! Enrich use case: derive tags for every record

use crate::application::workspace::Workspace;
use crate::application::write::{commit, WriteOptions};
use crate::domain::record::parse_records;
use crate::domain::tags::{enrich_content, Coverage};
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichFileChange {
    pub path: PathBuf,
    pub changed_records: usize,
    pub tags_added: usize,
    pub attributes_added: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichReport {
    pub scanned_files: usize,
    pub records: usize,
    pub changes: Vec<EnrichFileChange>,
    /// Tag coverage after enrichment
    pub coverage: Coverage,
    pub dry_run: bool,
}

impl EnrichReport {
    pub fn changed_records(&self) -> usize {
        self.changes.iter().map(|c| c.changed_records).sum()
    }

    pub fn tags_added(&self) -> usize {
        self.changes.iter().map(|c| c.tags_added).sum()
    }
}

pub fn enrich(workspace: &Workspace, options: WriteOptions) -> Result<EnrichReport> {
    let files = workspace.load()?;
    let mut changes = Vec::new();
    let mut records = 0usize;
    let mut coverage = Coverage {
        total: 0,
        tagged: 0,
    };

    for file in &files {
        let outcome = enrich_content(&file.content, &workspace.lexicon);
        records += outcome.records;

        let after = Coverage::from_records(&parse_records(&outcome.content));
        coverage.total += after.total;
        coverage.tagged += after.tagged;

        if commit(&file.path, &file.content, &outcome.content, options)? {
            info!(
                path = %file.path.display(),
                records = outcome.changed_records,
                tags = outcome.tags_added,
                "enriched"
            );
            changes.push(EnrichFileChange {
                path: file.path.clone(),
                changed_records: outcome.changed_records,
                tags_added: outcome.tags_added,
                attributes_added: outcome.attributes_added,
            });
        }
    }

    Ok(EnrichReport {
        scanned_files: files.len(),
        records,
        changes,
        coverage,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"<div class="link-grid">
    <a href="https://instagram.com/museobotero" target="_blank">🇨🇴 Museo Botero</a>
</div>
"#;

    fn workspace(temp: &TempDir) -> Workspace {
        fs::write(temp.path().join("links.md"), PAGE).unwrap();
        Workspace::from_config(temp.path().to_path_buf(), Config::new("links.md".into())).unwrap()
    }

    #[test]
    fn enrich_writes_and_reports() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);

        let report = enrich(&ws, WriteOptions::default()).unwrap();
        assert_eq!(report.records, 1);
        assert_eq!(report.changes.len(), 1);
        assert_eq!(report.changes[0].attributes_added, 1);
        assert_eq!(report.coverage.tagged, 1);

        let written = fs::read_to_string(temp.path().join("links.md")).unwrap();
        assert!(written.contains("data-tags=\""));
        assert!(written.contains("colombia"));

        let again = enrich(&ws, WriteOptions::default()).unwrap();
        assert!(again.changes.is_empty());
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);

        let report = enrich(
            &ws,
            WriteOptions {
                dry_run: true,
                backup: false,
            },
        )
        .unwrap();
        assert!(report.dry_run);
        assert_eq!(report.changes.len(), 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("links.md")).unwrap(),
            PAGE
        );
    }
}
