//! Tag system

pub mod audit;
pub mod enrich;
pub mod fix;
pub mod lexicon;
pub mod normalize;
pub mod verify;

// Re-export main types
pub use audit::{audit_records, dedupe_content, AuditReport, Coverage, DedupeOutcome};
pub use enrich::{enrich_content, EnrichOutcome};
pub use fix::{fix_tag_issues, FixOutcome};
pub use lexicon::{Lexicon, LexiconOverrides};
pub use normalize::{normalize_tag, normalize_tags, render_tags};
pub use verify::{apply_findings, verify_records, ApplyOutcome, Finding, IssueKind};
