//! Writing rewritten content back to disk

use crate::error::Result;
use crate::infrastructure::repository::{backup, write_atomic};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Report only; leave files untouched
    pub dry_run: bool,
    /// Copy the original aside before replacing it
    pub backup: bool,
}

/// Replace `path` with `updated` when it differs from `original`.
///
/// Returns whether the content changed, whether or not it was written.
pub fn commit(path: &Path, original: &str, updated: &str, options: WriteOptions) -> Result<bool> {
    if original == updated {
        debug!(path = %path.display(), "content unchanged");
        return Ok(false);
    }

    if options.dry_run {
        info!(path = %path.display(), "dry run, not writing");
        return Ok(true);
    }

    if options.backup {
        let copy = backup(path)?;
        info!(backup = %copy.display(), "saved backup");
    }

    write_atomic(path, updated)?;
    info!(path = %path.display(), "content written");
    Ok(true)
}
