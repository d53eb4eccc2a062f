//! Initialize project use case

use crate::error::{LinkTagsError, Result};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Create `linktags.toml` in `path` and return the file's location.
pub fn init(path: &Path, content: Option<PathBuf>) -> Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    if repo.is_initialized() {
        return Err(LinkTagsError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let config = match content {
        Some(content) => Config::new(content),
        None => Config::default(),
    };
    repo.save_config(&config)?;

    let config_path = repo.root().join(crate::infrastructure::CONFIG_FILE);
    info!(path = %config_path.display(), "created config");
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_config_once() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site");

        let created = init(&site, Some(PathBuf::from("links.md"))).unwrap();
        assert!(created.exists());
        assert_eq!(
            Config::load_from_dir(&site).unwrap().content,
            PathBuf::from("links.md")
        );

        assert!(init(&site, None).is_err());
    }
}
