//! Project discovery and content file access

use crate::error::{LinkTagsError, Result};
use crate::infrastructure::config::{resolve_path, Config, CONFIG_FILE};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Repository trait for project storage
pub trait ProjectRepository {
    /// Directory holding `linktags.toml`
    fn root(&self) -> &Path;

    /// Load configuration
    fn load_config(&self) -> Result<Config>;

    /// Save configuration
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if `linktags.toml` exists at the root
    fn is_initialized(&self) -> bool;
}

/// File system implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the project root.
    /// `LINKTAGS_ROOT` wins; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("LINKTAGS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_file(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(LinkTagsError::Config(format!(
                "LINKTAGS_ROOT is set to '{}' but no {} found there. \
                Run 'linktags init' in that directory or unset LINKTAGS_ROOT.",
                path.display(),
                CONFIG_FILE
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory holds `linktags.toml`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_file(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(LinkTagsError::NotProjectDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config_file(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Resolve a config path against the root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_path(&self.root, path)
    }
}

impl ProjectRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_file(&self.root)
    }
}

/// Read a content file; a missing file is [`LinkTagsError::ContentNotFound`].
pub fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LinkTagsError::ContentNotFound(path.to_path_buf())
        } else {
            LinkTagsError::Io(e)
        }
    })
}

/// Markdown files a content path stands for.
///
/// A file stands for itself. A directory stands for every `.md` file below
/// it, sorted, skipping hidden directories.
pub fn content_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(LinkTagsError::ContentNotFound(path.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("md"))
        .collect();

    files.sort();
    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

/// Replace a file's contents via a temp file in the same directory and a rename.
///
/// On Windows, `rename` does not overwrite existing files, so the destination
/// is removed first.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        ".{}.linktags-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("content.md"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = replace_with(&tmp_path, path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

fn replace_with(tmp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(tmp_path, content)?;

    if cfg!(windows) && path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(tmp_path, path)
}

/// Copy `path` to `<name>.<timestamp>.bak` beside it and return the copy's path.
pub fn backup(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("content.md");
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_path = path.with_file_name(format!("{}.{}.bak", name, stamp));

    fs::copy(path, &backup_path)?;
    Ok(backup_path)
}
