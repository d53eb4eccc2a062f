//! CSV export use case

use crate::application::workspace::Workspace;
use crate::domain::export::{export_rows, write_csv};
use crate::error::Result;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
}

/// Write every record to CSV. `output` overrides the configured `csv_output`.
pub fn export_csv(workspace: &Workspace, output: Option<&Path>) -> Result<ExportReport> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => workspace.resolve(&workspace.config.csv_output),
    };

    let records = workspace.records()?;
    let rows = export_rows(&records, &workspace.directory);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&path)?;
    let written = write_csv(BufWriter::new(file), &rows)?;
    info!(path = %path.display(), rows = written, "exported csv");

    Ok(ExportReport {
        path,
        rows: written,
    })
}
