//! Analyze and stats use cases

use crate::application::workspace::Workspace;
use crate::domain::analyze::{analyze_records, username_list, AnalyzeReport};
use crate::domain::tags::Coverage;
use crate::error::Result;
use crate::infrastructure::repository::write_atomic;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where `--usernames` should write, if at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameOutput {
    Skip,
    /// Use the configured `usernames_output`
    Configured,
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub report: AnalyzeReport,
    /// Set when the username list was written
    pub usernames_written: Option<PathBuf>,
}

pub fn analyze(workspace: &Workspace, usernames: UsernameOutput) -> Result<AnalyzeOutcome> {
    let records = workspace.records()?;
    let report = analyze_records(&records);
    info!(records = report.total, "analysis complete");

    let target = match usernames {
        UsernameOutput::Skip => None,
        UsernameOutput::Configured => Some(workspace.resolve(&workspace.config.usernames_output)),
        UsernameOutput::Path(path) => Some(path),
    };

    let usernames_written = match target {
        Some(path) => {
            write_usernames(&path, &report)?;
            Some(path)
        }
        None => None,
    };

    Ok(AnalyzeOutcome {
        report,
        usernames_written,
    })
}

fn write_usernames(path: &Path, report: &AnalyzeReport) -> Result<()> {
    write_atomic(path, &username_list(report))?;
    info!(path = %path.display(), count = report.usernames.len(), "wrote username list");
    Ok(())
}

/// Tag coverage across all content files.
pub fn stats(workspace: &Workspace) -> Result<Coverage> {
    let records = workspace.records()?;
    Ok(Coverage::from_records(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir) -> Workspace {
        fs::write(
            temp.path().join("links.md"),
            r#"<a href="https://instagram.com/b_one" data-tags="x">B</a>
<a href="https://instagram.com/a_two">A</a>"#,
        )
        .unwrap();
        Workspace::from_config(temp.path().to_path_buf(), Config::new("links.md".into())).unwrap()
    }

    #[test]
    fn writes_configured_username_list() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);

        let outcome = analyze(&ws, UsernameOutput::Configured).unwrap();
        let path = outcome.usernames_written.unwrap();
        assert_eq!(path, temp.path().join("instagram_usernames.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "a_two\nb_one\n");
    }

    #[test]
    fn skip_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp);

        let outcome = analyze(&ws, UsernameOutput::Skip).unwrap();
        assert!(outcome.usernames_written.is_none());
        assert_eq!(outcome.report.total, 2);
    }

    #[test]
    fn stats_counts_coverage() {
        let temp = TempDir::new().unwrap();
        let coverage = stats(&workspace(&temp)).unwrap();
        assert_eq!(coverage.total, 2);
        assert_eq!(coverage.tagged, 1);
    }
}
