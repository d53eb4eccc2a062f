//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod prompt;
pub mod repository;

pub use config::{Config, CONFIG_FILE};
pub use repository::{FileSystemRepository, ProjectRepository};
