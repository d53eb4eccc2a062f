//! Fix use case: repair underscores, missing type tags, and untagged records

use crate::application::workspace::Workspace;
use crate::application::write::{commit, WriteOptions};
use crate::domain::tags::fix_tag_issues;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixFileChange {
    pub path: PathBuf,
    pub underscore_fixes: usize,
    pub type_tags_added: usize,
    pub untagged_fixed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    pub scanned_files: usize,
    pub changes: Vec<FixFileChange>,
    pub dry_run: bool,
}

impl FixReport {
    pub fn underscore_fixes(&self) -> usize {
        self.changes.iter().map(|c| c.underscore_fixes).sum()
    }

    pub fn type_tags_added(&self) -> usize {
        self.changes.iter().map(|c| c.type_tags_added).sum()
    }

    pub fn untagged_fixed(&self) -> usize {
        self.changes.iter().map(|c| c.untagged_fixed).sum()
    }

    pub fn total(&self) -> usize {
        self.underscore_fixes() + self.type_tags_added() + self.untagged_fixed()
    }
}

pub fn fix_tags(workspace: &Workspace, options: WriteOptions) -> Result<FixReport> {
    let files = workspace.load()?;
    let mut changes = Vec::new();

    for file in &files {
        let outcome = fix_tag_issues(&file.content);
        if commit(&file.path, &file.content, &outcome.content, options)? {
            info!(path = %file.path.display(), fixes = outcome.total(), "fixed tags");
            changes.push(FixFileChange {
                path: file.path.clone(),
                underscore_fixes: outcome.underscore_fixes,
                type_tags_added: outcome.type_tags_added,
                untagged_fixed: outcome.untagged_fixed,
            });
        }
    }

    Ok(FixReport {
        scanned_files: files.len(),
        changes,
        dry_run: options.dry_run,
    })
}
