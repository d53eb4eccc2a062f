//! Tag enrichment: union derived tags into every record

use super::lexicon::{username_tag, Lexicon};
use super::normalize::{normalize_tags, render_tags};
use crate::domain::record::{apply_edits, parse_records, LinkRecord};
use std::collections::BTreeSet;

/// Result of an enrichment pass over one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichOutcome {
    pub content: String,
    pub records: usize,
    pub changed_records: usize,
    pub tags_added: usize,
    pub attributes_added: usize,
}

/// Tags a record should carry based on its text and URL alone.
pub fn derive_tags(record: &LinkRecord, lexicon: &Lexicon) -> BTreeSet<String> {
    let mut tags = lexicon.tags_for_text(&record.text);

    if let Some(tag) = record
        .instagram_username()
        .and_then(|name| username_tag(&name))
    {
        tags.insert(tag);
    }

    tags
}

/// The full tag set for a record: normalized existing tags, derived tags,
/// and everything they imply.
pub fn enriched_tags(record: &LinkRecord, lexicon: &Lexicon) -> BTreeSet<String> {
    let mut tags = normalize_tags(&record.tags);
    tags.extend(derive_tags(record, lexicon));
    lexicon.apply_implications(&mut tags);
    tags
}

/// Rewrite every record's `data-tags` as the sorted union of its existing
/// and derived tags.
///
/// Records that end up with no tags and have no attribute are left alone.
pub fn enrich_content(content: &str, lexicon: &Lexicon) -> EnrichOutcome {
    let records = parse_records(content);
    let mut edits = Vec::new();
    let mut tags_added = 0usize;
    let mut attributes_added = 0usize;

    for record in &records {
        let before = normalize_tags(&record.tags);
        let after = enriched_tags(record, lexicon);
        let rendered = render_tags(&after);

        match &record.tags_attr {
            Some(range) if content[range.clone()] == rendered => continue,
            Some(_) => {}
            None if after.is_empty() => continue,
            None => attributes_added += 1,
        }

        tags_added += after.difference(&before).count();
        edits.push(record.tags_edit(&rendered));
    }

    EnrichOutcome {
        changed_records: edits.len(),
        content: apply_edits(content, edits),
        records: records.len(),
        tags_added,
        attributes_added,
    }
}
