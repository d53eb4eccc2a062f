//! linktags - Maintenance passes for an HTML-in-markdown link directory
//!
//! Keeps the `data-tags` attributes of a markdown link page consistent:
//! derives location and category tags, audits and verifies them, sorts
//! link grids, and exports the directory to CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LinkTagsError;
