//! Repairs for common tag problems

use super::lexicon::username_tag;
use super::normalize::{contains_word, fold_for_matching};
use crate::domain::record::{apply_edits, parse_records, Edit};
use std::collections::BTreeSet;

/// Tags that count as an organization type.
pub const TYPE_TAGS: &[&str] = &[
    "embassy",
    "consulate",
    "museum",
    "restaurant",
    "government",
    "cultural",
    "education",
    "travel",
    "food",
    "media",
];

/// Ordered inference rules: the first rule whose word appears wins.
const TYPE_INFERENCE: &[(&[&str], &str)] = &[
    (&["embassy", "embajada"], "embassy"),
    (&["consulate", "consulado"], "consulate"),
    (&["museum", "museo"], "museum"),
    (&["theater", "teatro"], "theater"),
    (&["restaurant", "food", "cocina"], "food"),
    (&["cultural", "cultura"], "cultural"),
    (&["university", "universidad"], "education"),
    (&["travel", "tourism"], "travel"),
    (&["news", "media"], "media"),
    (&["ministry", "ministerio"], "government"),
];

const DIPLOMATIC_TAGS: &[&str] = &["diplomatic", "foreign-affairs", "international-relations"];

/// Result of the fix pass over one piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixOutcome {
    pub content: String,
    /// Records whose tags contained underscores
    pub underscore_fixes: usize,
    /// Records that gained an inferred type tag
    pub type_tags_added: usize,
    /// Records that had no `data-tags` attribute
    pub untagged_fixed: usize,
}

impl FixOutcome {
    pub fn total(&self) -> usize {
        self.underscore_fixes + self.type_tags_added + self.untagged_fixed
    }
}

/// Infer a single type tag from display text.
pub fn infer_type_tag(text: &str) -> Option<&'static str> {
    let folded = fold_for_matching(text);
    TYPE_INFERENCE
        .iter()
        .find(|(words, _)| words.iter().any(|word| contains_word(&folded, word)))
        .map(|(_, tag)| *tag)
}

/// Replace underscores with hyphens, add missing type tags, and give
/// untagged records a starting tag set.
pub fn fix_tag_issues(content: &str) -> FixOutcome {
    let records = parse_records(content);
    let mut outcome = FixOutcome::default();
    let mut edits: Vec<Edit> = Vec::new();

    for record in &records {
        let Some(range) = &record.tags_attr else {
            let mut tags: Vec<String> = record
                .instagram_username()
                .and_then(|name| username_tag(&name))
                .into_iter()
                .collect();

            match infer_type_tag(&record.text) {
                Some("embassy") => {
                    tags.extend(["embassy", "diplomatic", "foreign-affairs"].map(String::from))
                }
                Some("consulate") => {
                    tags.extend(["consulate", "diplomatic", "consular-services"].map(String::from))
                }
                Some(inferred) => tags.push(inferred.to_string()),
                None => {}
            }

            if !tags.is_empty() {
                outcome.untagged_fixed += 1;
                edits.push(record.tags_edit(&tags.join(" ")));
            }
            continue;
        };

        let original = &content[range.clone()];
        let mut tags: Vec<String> = original
            .split_whitespace()
            .map(|tag| tag.replace('_', "-"))
            .collect();

        if original.contains('_') {
            outcome.underscore_fixes += 1;
        }

        let has_type = tags.iter().any(|tag| TYPE_TAGS.contains(&tag.as_str()));
        if !has_type {
            if let Some(inferred) = infer_type_tag(&record.text) {
                let before = tags.len();
                tags.push(inferred.to_string());
                if inferred == "embassy" || inferred == "consulate" {
                    tags.extend(DIPLOMATIC_TAGS.iter().map(|tag| tag.to_string()));
                }

                let unique: BTreeSet<String> = tags.into_iter().collect();
                if unique.len() > before {
                    outcome.type_tags_added += 1;
                }
                tags = unique.into_iter().collect();
            }
        }

        let rendered = tags.join(" ");
        if rendered != original {
            edits.push(record.tags_edit(&rendered));
        }
    }

    outcome.content = apply_edits(content, edits);
    outcome
}
