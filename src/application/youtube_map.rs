//! Hover-menu script update use case

use crate::application::workspace::Workspace;
use crate::application::write::{commit, WriteOptions};
use crate::domain::directory::{replace_youtube_map, YOUTUBE_MAP_MARKER};
use crate::error::{LinkTagsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeMapReport {
    pub path: PathBuf,
    pub entries: usize,
    pub changed: bool,
    pub dry_run: bool,
}

/// Rewrite the `youtubeMap` literal from the directory's YouTube table.
///
/// `script` overrides the configured `hover_menu_script`.
pub fn update_youtube_map(
    workspace: &Workspace,
    script: Option<&Path>,
    options: WriteOptions,
) -> Result<YoutubeMapReport> {
    let path = match (script, &workspace.config.hover_menu_script) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(configured)) => workspace.resolve(configured),
        (None, None) => {
            return Err(LinkTagsError::Config(
                "No hover menu script configured. \
                Set it with: linktags config hover_menu_script <path>"
                    .to_string(),
            ))
        }
    };

    let original = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LinkTagsError::Config(format!("Hover menu script not found: {}", path.display()))
        } else {
            LinkTagsError::Io(e)
        }
    })?;

    let channels = workspace.directory.youtube_channels();
    let updated =
        replace_youtube_map(&original, channels).ok_or_else(|| LinkTagsError::MarkerNotFound {
            path: path.clone(),
            marker: YOUTUBE_MAP_MARKER.to_string(),
        })?;

    let changed = commit(&path, &original, &updated, options)?;
    info!(path = %path.display(), entries = channels.len(), changed, "youtube map updated");

    Ok(YoutubeMapReport {
        path,
        entries: channels.len(),
        changed,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir) -> Workspace {
        let mut config = Config::new("links.md".into());
        config.hover_menu_script = Some(PathBuf::from("menu.js"));
        Workspace::from_config(temp.path().to_path_buf(), config).unwrap()
    }

    #[test]
    fn rewrites_configured_script() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("menu.js"),
            "    const youtubeMap = {\n        'x': 'y'\n    };\n",
        )
        .unwrap();
        let ws = workspace(&temp);

        let report = update_youtube_map(&ws, None, WriteOptions::default()).unwrap();
        assert!(report.changed);
        assert!(report.entries > 0);

        let script = fs::read_to_string(temp.path().join("menu.js")).unwrap();
        assert!(script.starts_with("    const youtubeMap = {\n        '"));
        assert!(script.contains("'museobotero': 'https://www.youtube.com/@museobotero'"));
        assert!(script.ends_with("\n    };\n"));

        let again = update_youtube_map(&ws, None, WriteOptions::default()).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn missing_marker_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("menu.js"), "const other = {};\n").unwrap();
        let ws = workspace(&temp);

        match update_youtube_map(&ws, None, WriteOptions::default()).unwrap_err() {
            LinkTagsError::MarkerNotFound { marker, .. } => {
                assert_eq!(marker, YOUTUBE_MAP_MARKER)
            }
            other => panic!("Expected MarkerNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn requires_a_script_path() {
        let temp = TempDir::new().unwrap();
        let ws =
            Workspace::from_config(temp.path().to_path_buf(), Config::new("links.md".into())).unwrap();
        assert!(update_youtube_map(&ws, None, WriteOptions::default()).is_err());
    }
}
