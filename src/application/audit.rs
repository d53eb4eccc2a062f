//! Audit use case: consistency report and duplicate removal

use crate::application::workspace::Workspace;
use crate::application::write::{commit, WriteOptions};
use crate::domain::tags::{audit_records, dedupe_content, AuditReport};
use crate::error::Result;
use tracing::info;

/// Audit every record across the content files.
pub fn audit(workspace: &Workspace) -> Result<AuditReport> {
    let records = workspace.records()?;
    let report = audit_records(&records);
    info!(
        records = records.len(),
        issues = report.issue_count(),
        "audit complete"
    );
    Ok(report)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupeReport {
    pub changed_files: usize,
    pub records_fixed: usize,
    pub dry_run: bool,
}

/// Remove repeated tags inside each record.
pub fn remove_duplicate_tags(workspace: &Workspace, options: WriteOptions) -> Result<DedupeReport> {
    let mut report = DedupeReport {
        dry_run: options.dry_run,
        ..DedupeReport::default()
    };

    for file in workspace.load()? {
        let outcome = dedupe_content(&file.content);
        if commit(&file.path, &file.content, &outcome.content, options)? {
            report.changed_files += 1;
            report.records_fixed += outcome.fixed;
        }
    }

    info!(records = report.records_fixed, "removed duplicate tags");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn audit_then_dedupe() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("links.md"),
            r#"<a href="https://a.com" data-tags="mexico embassy mexico">A</a>
<a href="https://b.com">B</a>"#,
        )
        .unwrap();
        let ws =
            Workspace::from_config(temp.path().to_path_buf(), Config::new("links.md".into())).unwrap();

        let report = audit(&ws).unwrap();
        assert_eq!(report.duplicate_tags.len(), 1);
        assert_eq!(report.without_attribute.len(), 1);

        let fixed = remove_duplicate_tags(&ws, WriteOptions::default()).unwrap();
        assert_eq!(fixed.records_fixed, 1);
        assert!(audit(&ws).unwrap().duplicate_tags.is_empty());
    }
}
