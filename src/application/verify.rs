//! Verify use case: required-tag findings and their repair

use crate::application::workspace::Workspace;
use crate::application::write::{commit, WriteOptions};
use crate::domain::tags::{apply_findings, verify_records, Finding};
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub records: usize,
    /// Findings per content file, files without findings omitted
    pub files: Vec<(PathBuf, Vec<Finding>)>,
}

impl VerifyReport {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|(_, findings)| findings.iter())
    }

    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|(_, findings)| findings.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.finding_count() == 0
    }
}

pub fn verify(workspace: &Workspace) -> Result<VerifyReport> {
    let mut records = 0usize;
    let mut files = Vec::new();

    for file in workspace.load()? {
        let parsed = file.records();
        records += parsed.len();
        let findings = verify_records(&parsed);
        if !findings.is_empty() {
            files.push((file.path, findings));
        }
    }

    let report = VerifyReport { records, files };
    info!(findings = report.finding_count(), "verification complete");
    Ok(report)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyFixReport {
    pub changed_files: usize,
    pub records_fixed: usize,
    /// How many records gained each tag
    pub added: BTreeMap<String, usize>,
    pub dry_run: bool,
}

/// Union every missing tag into its record.
pub fn fix_findings(workspace: &Workspace, options: WriteOptions) -> Result<VerifyFixReport> {
    let mut report = VerifyFixReport {
        dry_run: options.dry_run,
        ..VerifyFixReport::default()
    };

    for file in workspace.load()? {
        let records = file.records();
        let findings = verify_records(&records);
        if findings.is_empty() {
            continue;
        }

        let outcome = apply_findings(&file.content, &records, &findings);
        if commit(&file.path, &file.content, &outcome.content, options)? {
            report.changed_files += 1;
            let mut fixed: Vec<usize> = findings.iter().map(|f| f.record).collect();
            fixed.dedup();
            report.records_fixed += fixed.len();
            for (tag, count) in outcome.added {
                *report.added.entry(tag).or_default() += count;
            }
        }
    }

    info!(records = report.records_fixed, "added missing tags");
    Ok(report)
}
