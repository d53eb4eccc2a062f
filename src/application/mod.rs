//! Application layer - Use cases and orchestration

pub mod analyze;
pub mod audit;
pub mod enrich;
pub mod export_csv;
pub mod fix_tags;
pub mod init;
pub mod layout;
pub mod manage_config;
pub mod verify;
pub mod workspace;
pub mod write;
pub mod youtube_map;

pub use manage_config::ConfigService;
pub use workspace::{Workspace, WorkspaceOptions};
pub use write::WriteOptions;
