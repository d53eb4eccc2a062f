//! Tag consistency audit

use super::normalize::is_well_formed;
use crate::domain::record::{apply_edits, parse_records, LinkRecord};
use std::collections::{BTreeMap, HashSet};

/// Country tags that satisfy the "has a location" check.
pub const BASIC_LOCATION_TAGS: &[&str] = &[
    "mexico",
    "colombia",
    "venezuela",
    "usa",
    "canada",
    "brazil",
    "argentina",
    "chile",
    "peru",
];

/// Type tags that satisfy the "has a category" check.
pub const BASIC_TYPE_TAGS: &[&str] = &[
    "embassy",
    "consulate",
    "museum",
    "restaurant",
    "government",
    "cultural",
    "education",
    "travel",
];

/// Minimal identification of a record in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub text: String,
    pub url: String,
}

impl From<&LinkRecord> for RecordRef {
    fn from(record: &LinkRecord) -> Self {
        Self {
            text: record.display_name().to_string(),
            url: record.url.clone(),
        }
    }
}

/// Tag counts across records.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStats {
    pub unique: usize,
    pub average: f64,
    pub max: usize,
    pub min: usize,
}

/// Share of records carrying a `data-tags` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub total: usize,
    pub tagged: usize,
}

impl Coverage {
    pub fn from_records(records: &[LinkRecord]) -> Self {
        Self {
            total: records.len(),
            tagged: records.iter().filter(|r| r.has_tags_attr()).count(),
        }
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.tagged as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub coverage: Coverage,
    pub without_attribute: Vec<RecordRef>,
    pub empty_tags: Vec<RecordRef>,
    pub malformed_tags: Vec<(RecordRef, String)>,
    pub duplicate_tags: Vec<(RecordRef, Vec<String>)>,
    pub missing_basic: Vec<(RecordRef, Vec<String>)>,
    /// Every tag with its use count, most used first
    pub frequency: Vec<(String, usize)>,
    /// Tags used exactly once, alphabetical
    pub rare: Vec<String>,
    /// `None` when no record has tags
    pub stats: Option<TagStats>,
}

impl AuditReport {
    pub fn issue_count(&self) -> usize {
        self.without_attribute.len()
            + self.empty_tags.len()
            + self.malformed_tags.len()
            + self.duplicate_tags.len()
            + self.missing_basic.len()
    }
}

/// Audit a set of records (possibly gathered from several files).
pub fn audit_records(records: &[LinkRecord]) -> AuditReport {
    let mut without_attribute = Vec::new();
    let mut empty_tags = Vec::new();
    let mut malformed_tags = Vec::new();
    let mut duplicate_tags = Vec::new();
    let mut missing_basic = Vec::new();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut per_record: Vec<usize> = Vec::new();

    for record in records {
        if !record.has_tags_attr() {
            without_attribute.push(RecordRef::from(record));
            continue;
        }
        if record.tags.is_empty() {
            empty_tags.push(RecordRef::from(record));
            continue;
        }

        per_record.push(record.tags.len());

        let dupes = duplicates(&record.tags);
        if !dupes.is_empty() {
            duplicate_tags.push((RecordRef::from(record), dupes));
        }

        for tag in &record.tags {
            if !is_well_formed(tag) {
                malformed_tags.push((RecordRef::from(record), tag.clone()));
            }
            *counts.entry(tag.clone()).or_default() += 1;
        }

        let has_location = record
            .tags
            .iter()
            .any(|tag| BASIC_LOCATION_TAGS.contains(&tag.as_str()));
        let has_type = record
            .tags
            .iter()
            .any(|tag| BASIC_TYPE_TAGS.contains(&tag.as_str()));
        if !has_location && !has_type {
            missing_basic.push((RecordRef::from(record), record.tags.clone()));
        }
    }

    let rare = counts
        .iter()
        .filter(|(_, count)| **count == 1)
        .map(|(tag, _)| tag.clone())
        .collect();

    let stats = if per_record.is_empty() {
        None
    } else {
        Some(TagStats {
            unique: counts.len(),
            average: per_record.iter().sum::<usize>() as f64 / per_record.len() as f64,
            max: per_record.iter().copied().max().unwrap_or_default(),
            min: per_record.iter().copied().min().unwrap_or_default(),
        })
    };

    let mut frequency: Vec<(String, usize)> = counts.into_iter().collect();
    frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    AuditReport {
        coverage: Coverage::from_records(records),
        without_attribute,
        empty_tags,
        malformed_tags,
        duplicate_tags,
        missing_basic,
        frequency,
        rare,
        stats,
    }
}

fn duplicates(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dupes: Vec<String> = Vec::new();
    for tag in tags {
        if !seen.insert(tag.as_str()) && !dupes.contains(tag) {
            dupes.push(tag.clone());
        }
    }
    dupes
}

/// Result of removing duplicate tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeOutcome {
    pub content: String,
    pub fixed: usize,
}

/// Drop repeated tags within each record, keeping the first occurrence.
pub fn dedupe_content(content: &str) -> DedupeOutcome {
    let records = parse_records(content);
    let mut edits = Vec::new();

    for record in &records {
        if duplicates(&record.tags).is_empty() {
            continue;
        }

        let mut seen = HashSet::new();
        let unique: Vec<&str> = record
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect();
        edits.push(record.tags_edit(&unique.join(" ")));
    }

    DedupeOutcome {
        fixed: edits.len(),
        content: apply_edits(content, edits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<a href="https://a.com" data-tags="mexico embassy mexico">A</a>
<a href="https://b.com" data-tags="">B</a>
<a href="https://c.com">C</a>
<a href="https://d.com" data-tags="Bogotá random">D</a>
<a href="https://e.com" data-tags="colombia museum">E</a>"#;

    #[test]
    fn reports_each_issue_kind() {
        let report = audit_records(&parse_records(PAGE));

        assert_eq!(report.coverage.total, 5);
        assert_eq!(report.coverage.tagged, 4);
        assert_eq!(report.without_attribute.len(), 1);
        assert_eq!(report.without_attribute[0].text, "C");
        assert_eq!(report.empty_tags.len(), 1);
        assert_eq!(report.duplicate_tags.len(), 1);
        assert_eq!(report.duplicate_tags[0].1, vec!["mexico"]);
        assert_eq!(report.malformed_tags.len(), 1);
        assert_eq!(report.malformed_tags[0].1, "Bogotá");
        assert_eq!(report.missing_basic.len(), 1);
        assert_eq!(report.missing_basic[0].0.text, "D");
    }

    #[test]
    fn computes_frequency_and_stats() {
        let report = audit_records(&parse_records(PAGE));

        assert_eq!(report.frequency[0], ("mexico".to_string(), 2));
        assert!(report.rare.contains(&"random".to_string()));
        assert!(!report.rare.contains(&"mexico".to_string()));

        let stats = report.stats.unwrap();
        assert_eq!(stats.max, 3);
        assert_eq!(stats.min, 2);
        assert!((stats.average - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn coverage_percent() {
        let coverage = Coverage {
            total: 4,
            tagged: 3,
        };
        assert!((coverage.percent() - 75.0).abs() < 1e-9);
        assert_eq!(Coverage { total: 0, tagged: 0 }.percent(), 0.0);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let outcome = dedupe_content(PAGE);
        assert_eq!(outcome.fixed, 1);
        assert!(outcome.content.contains(r#"data-tags="mexico embassy">A"#));

        let report = audit_records(&parse_records(&outcome.content));
        assert!(report.duplicate_tags.is_empty());
    }
}
