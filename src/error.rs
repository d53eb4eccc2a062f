//! Error types for linktags

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for linktags
#[derive(Debug, Error)]
pub enum LinkTagsError {
    #[error("Not a linktags project: {0}")]
    NotProjectDirectory(PathBuf),

    #[error("Content file not found: {0}")]
    ContentNotFound(PathBuf),

    #[error("Marker '{marker}' not found in {path}")]
    MarkerNotFound { path: PathBuf, marker: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LinkTagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LinkTagsError::NotProjectDirectory(_) => 2,
            LinkTagsError::ContentNotFound(_) => 3,
            LinkTagsError::MarkerNotFound { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LinkTagsError::NotProjectDirectory(path) => {
                format!(
                    "Not a linktags project: {}\n\n\
                    Suggestions:\n\
                    • Run 'linktags init' in your site directory to create linktags.toml\n\
                    • Pass the content file directly: linktags --file content/links/_index.md enrich\n\
                    • Set LINKTAGS_ROOT environment variable to your project path",
                    path.display()
                )
            }
            LinkTagsError::ContentNotFound(path) => {
                format!(
                    "Content file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the 'content' key: linktags config content\n\
                    • Point it at your links page: linktags config content content/links/_index.md\n\
                    • Override it for one run with --file <path>",
                    path.display()
                )
            }
            LinkTagsError::MarkerNotFound { path, marker } => {
                format!(
                    "Marker '{}' not found in {}\n\n\
                    Suggestions:\n\
                    • The script must declare the table as: {} {{ ... }};\n\
                    • Check the 'hover_menu_script' key: linktags config hover_menu_script",
                    marker,
                    path.display(),
                    marker
                )
            }
            LinkTagsError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: linktags config csv_output exports/links.csv",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LinkTagsError
pub type Result<T> = std::result::Result<T, LinkTagsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_project_directory_suggestion() {
        let err = LinkTagsError::NotProjectDirectory(PathBuf::from("/tmp/site"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("linktags init"));
        assert!(msg.contains("LINKTAGS_ROOT"));
        assert!(msg.contains("--file"));
    }

    #[test]
    fn test_content_not_found_suggestions() {
        let err = LinkTagsError::ContentNotFound(PathBuf::from("missing.md"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("missing.md"));
        assert!(msg.contains("linktags config content"));
    }

    #[test]
    fn test_marker_not_found_mentions_marker() {
        let err = LinkTagsError::MarkerNotFound {
            path: PathBuf::from("menu.js"),
            marker: "const youtubeMap =".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("const youtubeMap = { ... };"));
        assert!(msg.contains("hover_menu_script"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            LinkTagsError::NotProjectDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(
            LinkTagsError::ContentNotFound(PathBuf::from("x")).exit_code(),
            3
        );
        assert_eq!(LinkTagsError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = LinkTagsError::Config("Invalid value".to_string());
        assert_eq!(err.display_with_suggestions(), "Invalid value");
    }
}
