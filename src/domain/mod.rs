//! Domain layer - Link records, tags, and the passes over them

pub mod analyze;
pub mod category;
pub mod directory;
pub mod export;
pub mod layout;
pub mod record;
pub mod tags;

pub use category::Category;
pub use directory::Directory;
pub use record::{apply_edits, parse_records, Edit, LinkRecord};
