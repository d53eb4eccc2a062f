//! Resolved project settings shared by every command

use crate::domain::record::{parse_records, LinkRecord};
use crate::domain::tags::Lexicon;
use crate::domain::Directory;
use crate::error::{LinkTagsError, Result};
use crate::infrastructure::config::resolve_path;
use crate::infrastructure::repository::{content_files, read_content};
use crate::infrastructure::{Config, FileSystemRepository, ProjectRepository};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceOptions {
    /// Content file or directory to use instead of the configured one
    pub file: Option<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// One content file loaded into memory.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub path: PathBuf,
    pub content: String,
}

impl ContentFile {
    pub fn records(&self) -> Vec<LinkRecord> {
        parse_records(&self.content)
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory relative config paths resolve against
    pub root: PathBuf,
    pub config: Config,
    /// Resolved content file or directory
    pub content: PathBuf,
    pub lexicon: Lexicon,
    pub directory: Directory,
}

impl Workspace {
    /// Locate and load the project.
    ///
    /// Without `linktags.toml`, `--file` alone is enough: builtin defaults are
    /// used and the current directory is the root.
    pub fn open(options: &WorkspaceOptions) -> Result<Self> {
        let (root, config) = match &options.config {
            Some(path) => {
                let root = path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (root, Config::load_from_file(path)?)
            }
            None => match FileSystemRepository::discover() {
                Ok(repo) => {
                    let config = repo.load_config()?;
                    (repo.root, config)
                }
                Err(LinkTagsError::NotProjectDirectory(_)) if options.file.is_some() => {
                    debug!("no config file found, using defaults");
                    (std::env::current_dir()?, Config::default())
                }
                Err(e) => return Err(e),
            },
        };

        let content = match &options.file {
            Some(file) => file.clone(),
            None => resolve_path(&root, &config.content),
        };

        debug!(root = %root.display(), content = %content.display(), "workspace resolved");

        Ok(Workspace {
            lexicon: Lexicon::with_overrides(&config.lexicon)?,
            directory: Directory::with_overrides(&config.youtube, &config.websites),
            root,
            config,
            content,
        })
    }

    /// Build a workspace from parts already in hand.
    pub fn from_config(root: PathBuf, config: Config) -> Result<Self> {
        let content = resolve_path(&root, &config.content);
        Ok(Workspace {
            lexicon: Lexicon::with_overrides(&config.lexicon)?,
            directory: Directory::with_overrides(&config.youtube, &config.websites),
            root,
            config,
            content,
        })
    }

    /// Resolve a configured output path against the root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_path(&self.root, path)
    }

    /// Read every content file.
    pub fn load(&self) -> Result<Vec<ContentFile>> {
        content_files(&self.content)?
            .into_iter()
            .map(|path| {
                let content = read_content(&path)?;
                debug!(path = %path.display(), bytes = content.len(), "loaded content");
                Ok(ContentFile { path, content })
            })
            .collect()
    }

    /// Records across all content files, in file order.
    pub fn records(&self) -> Result<Vec<LinkRecord>> {
        Ok(self
            .load()?
            .iter()
            .flat_map(ContentFile::records)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn from_config_resolves_content_against_root() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(PathBuf::from("links.md"));
        let ws = Workspace::from_config(temp.path().to_path_buf(), config).unwrap();
        assert_eq!(ws.content, temp.path().join("links.md"));
        assert_eq!(ws.resolve(Path::new("out.csv")), temp.path().join("out.csv"));
    }

    #[test]
    fn explicit_config_file_sets_root() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.toml");
        fs::write(&config_path, "content = \"pages\"\n").unwrap();

        let ws = Workspace::open(&WorkspaceOptions {
            file: None,
            config: Some(config_path),
        })
        .unwrap();
        assert_eq!(ws.root, temp.path());
        assert_eq!(ws.content, temp.path().join("pages"));
    }

    #[test]
    fn records_span_all_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("pages")).unwrap();
        fs::write(
            temp.path().join("pages/a.md"),
            r#"<a href="https://a.com">A</a>"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("pages/b.md"),
            r#"<a href="https://b.com">B</a> <a href="https://c.com">C</a>"#,
        )
        .unwrap();

        let ws =
            Workspace::from_config(temp.path().to_path_buf(), Config::new("pages".into())).unwrap();
        assert_eq!(ws.load().unwrap().len(), 2);
        assert_eq!(ws.records().unwrap().len(), 3);
    }

    #[test]
    fn missing_content_is_reported() {
        let temp = TempDir::new().unwrap();
        let ws =
            Workspace::from_config(temp.path().to_path_buf(), Config::new("gone.md".into())).unwrap();
        match ws.load().unwrap_err() {
            LinkTagsError::ContentNotFound(_) => {}
            other => panic!("Expected ContentNotFound error, got {:?}", other),
        }
    }
}
