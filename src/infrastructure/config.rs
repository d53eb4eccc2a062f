//! Configuration management

use crate::domain::tags::LexiconOverrides;
use crate::error::{LinkTagsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file at the project root.
pub const CONFIG_FILE: &str = "linktags.toml";

/// Keys `linktags config` can read or write.
pub const CONFIG_KEYS: &[&str] = &[
    "content",
    "csv_output",
    "hover_menu_script",
    "usernames_output",
    "backup",
    "created",
];

fn default_content() -> PathBuf {
    PathBuf::from("content/links/_index.md")
}

fn default_csv_output() -> PathBuf {
    PathBuf::from("links_directory.csv")
}

fn default_usernames_output() -> PathBuf {
    PathBuf::from("instagram_usernames.txt")
}

/// Project settings stored in `linktags.toml`.
///
/// Relative paths are relative to the directory holding the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Markdown file (or directory of files) holding the link records
    #[serde(default = "default_content")]
    pub content: PathBuf,
    #[serde(default = "default_csv_output")]
    pub csv_output: PathBuf,
    /// JavaScript file with the `youtubeMap` literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_menu_script: Option<PathBuf>,
    #[serde(default = "default_usernames_output")]
    pub usernames_output: PathBuf,
    /// Copy content files aside before rewriting them
    #[serde(default)]
    pub backup: bool,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "LexiconOverrides::is_empty")]
    pub lexicon: LexiconOverrides,
    /// Extra username to YouTube channel entries
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub youtube: BTreeMap<String, String>,
    /// Extra username to website entries
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub websites: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_content())
    }
}

impl Config {
    /// Create a new config pointing at the given content path
    pub fn new(content: PathBuf) -> Self {
        Config {
            content,
            csv_output: default_csv_output(),
            hover_menu_script: None,
            usernames_output: default_usernames_output(),
            backup: false,
            created: Utc::now(),
            lexicon: LexiconOverrides::default(),
            youtube: BTreeMap::new(),
            websites: BTreeMap::new(),
        }
    }

    /// Load `linktags.toml` from the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LinkTagsError::NotProjectDirectory(path.to_path_buf())
            } else {
                LinkTagsError::Io(e)
            }
        })?;

        Self::parse(&contents, &config_path)
    }

    /// Load an explicitly named config file
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LinkTagsError::Config(format!(
                    "Config file not found: {}",
                    config_path.display()
                ))
            } else {
                LinkTagsError::Io(e)
            }
        })?;

        Self::parse(&contents, config_path)
    }

    fn parse(contents: &str, config_path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            LinkTagsError::Config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Save to `linktags.toml` in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.save_to_file(&path.join(CONFIG_FILE))
    }

    pub fn save_to_file(&self, config_path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| LinkTagsError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, contents)?;

        Ok(())
    }

    /// Read one scalar key as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "content" => Ok(self.content.display().to_string()),
            "csv_output" => Ok(self.csv_output.display().to_string()),
            "hover_menu_script" => Ok(self
                .hover_menu_script
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "usernames_output" => Ok(self.usernames_output.display().to_string()),
            "backup" => Ok(self.backup.to_string()),
            "created" => Ok(self.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set one scalar key from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "content" => self.content = PathBuf::from(value),
            "csv_output" => self.csv_output = PathBuf::from(value),
            "hover_menu_script" => {
                self.hover_menu_script = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            "usernames_output" => self.usernames_output = PathBuf::from(value),
            "backup" => {
                self.backup = parse_bool(value).ok_or_else(|| {
                    LinkTagsError::Config(format!(
                        "Invalid value for 'backup': '{}'. Use true or false",
                        value
                    ))
                })?
            }
            "created" => {
                return Err(LinkTagsError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> LinkTagsError {
    LinkTagsError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new(PathBuf::from("links.md"));
        assert_eq!(config.content, PathBuf::from("links.md"));
        assert_eq!(config.csv_output, PathBuf::from("links_directory.csv"));
        assert!(config.hover_menu_script.is_none());
        assert!(!config.backup);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "content = [unclosed").unwrap();

        match Config::load_from_file(&path).unwrap_err() {
            LinkTagsError::Config(msg) => {
                assert!(msg.starts_with("Failed to parse"));
                assert!(msg.contains(CONFIG_FILE));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new(PathBuf::from("content/links.md"));
        config
            .lexicon
            .places
            .insert("Valledupar".to_string(), vec!["colombia".to_string()]);
        config
            .youtube
            .insert("newchannel".to_string(), "https://www.youtube.com/@new".to_string());

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "content = \"links.md\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.content, PathBuf::from("links.md"));
        assert_eq!(loaded.usernames_output, PathBuf::from("instagram_usernames.txt"));
        assert!(loaded.lexicon.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            LinkTagsError::NotProjectDirectory(_) => {}
            other => panic!("Expected NotProjectDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "content = [").unwrap();

        let err = Config::load_from_dir(temp.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = Config::default();

        config.set("backup", "yes").unwrap();
        assert_eq!(config.get("backup").unwrap(), "true");

        config.set("hover_menu_script", "static/js/menu.js").unwrap();
        assert_eq!(config.get("hover_menu_script").unwrap(), "static/js/menu.js");

        assert!(config.set("backup", "maybe").is_err());
        assert!(config.set("created", "2020-01-01").is_err());

        let err = config.get("nope").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/site");
        assert_eq!(
            resolve_path(base, Path::new("a/b.md")),
            PathBuf::from("/site/a/b.md")
        );
        assert_eq!(
            resolve_path(base, Path::new("/abs.md")),
            PathBuf::from("/abs.md")
        );
    }
}
