//! Required-tag verification
//!
//! Each rule has a trigger (a flag, words in the display text, or tags
//! already present) and a list of requirements. A requirement lists
//! acceptable alternatives; the first one is what `--fix` adds.

use super::lexicon::{flag_codes, username_tag};
use super::normalize::{contains_word, fold_for_matching, normalize_tags, render_tags};
use crate::domain::record::{apply_edits, LinkRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    MissingCountry,
    MissingRegion,
    MissingDiplomatic,
    MissingConsular,
    MissingCultural,
    MissingGovernment,
    MissingEducation,
    MissingFood,
    MissingLanguage,
    MissingUsername,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueKind::MissingCountry => "missing country",
            IssueKind::MissingRegion => "missing region",
            IssueKind::MissingDiplomatic => "missing diplomatic",
            IssueKind::MissingConsular => "missing consular",
            IssueKind::MissingCultural => "missing cultural",
            IssueKind::MissingGovernment => "missing government",
            IssueKind::MissingEducation => "missing education",
            IssueKind::MissingFood => "missing food",
            IssueKind::MissingLanguage => "missing language",
            IssueKind::MissingUsername => "missing username",
        };
        f.write_str(label)
    }
}

enum Trigger {
    Flag(&'static str),
    Words(&'static [&'static str]),
    AnyTag(&'static [&'static str]),
}

struct Requirement {
    trigger: Trigger,
    kind: IssueKind,
    required: &'static [&'static [&'static str]],
}

const SPANISH_SPEAKING: &[&str] = &[
    "mexico",
    "colombia",
    "venezuela",
    "spain",
    "argentina",
    "chile",
    "peru",
];

const RULES: &[Requirement] = &[
    Requirement {
        trigger: Trigger::Flag("CO"),
        kind: IssueKind::MissingCountry,
        required: &[&["colombia"]],
    },
    Requirement {
        trigger: Trigger::Flag("CO"),
        kind: IssueKind::MissingRegion,
        required: &[&["south-america"], &["latin-america"]],
    },
    Requirement {
        trigger: Trigger::Flag("MX"),
        kind: IssueKind::MissingCountry,
        required: &[&["mexico"]],
    },
    Requirement {
        trigger: Trigger::Flag("MX"),
        kind: IssueKind::MissingRegion,
        required: &[&["north-america"], &["latin-america"]],
    },
    Requirement {
        trigger: Trigger::Flag("VE"),
        kind: IssueKind::MissingCountry,
        required: &[&["venezuela"]],
    },
    Requirement {
        trigger: Trigger::Flag("VE"),
        kind: IssueKind::MissingRegion,
        required: &[&["south-america"]],
    },
    Requirement {
        trigger: Trigger::Flag("US"),
        kind: IssueKind::MissingCountry,
        required: &[&["usa", "united-states"]],
    },
    Requirement {
        trigger: Trigger::Flag("US"),
        kind: IssueKind::MissingRegion,
        required: &[&["north-america"]],
    },
    Requirement {
        trigger: Trigger::Flag("BR"),
        kind: IssueKind::MissingCountry,
        required: &[&["brazil"]],
    },
    Requirement {
        trigger: Trigger::Flag("BR"),
        kind: IssueKind::MissingRegion,
        required: &[&["south-america"]],
    },
    Requirement {
        trigger: Trigger::Flag("EU"),
        kind: IssueKind::MissingRegion,
        required: &[&["eu", "european-union"], &["europe"]],
    },
    Requirement {
        trigger: Trigger::Words(&["embassy", "embajada", "ambassade"]),
        kind: IssueKind::MissingDiplomatic,
        required: &[
            &["embassy"],
            &["diplomatic"],
            &["foreign-affairs"],
            &["international-relations"],
        ],
    },
    Requirement {
        trigger: Trigger::Words(&["consulate", "consulado", "consulat"]),
        kind: IssueKind::MissingConsular,
        required: &[
            &["consulate"],
            &["diplomatic"],
            &["consular-services"],
            &["international"],
        ],
    },
    Requirement {
        trigger: Trigger::Words(&["museum", "museo", "gallery", "galeria"]),
        kind: IssueKind::MissingCultural,
        required: &[&["museum"], &["culture"], &["art"]],
    },
    Requirement {
        trigger: Trigger::Words(&["theater", "theatre", "teatro"]),
        kind: IssueKind::MissingCultural,
        required: &[&["theater"], &["culture"], &["performing-arts"]],
    },
    Requirement {
        trigger: Trigger::Words(&["cultural", "cultura"]),
        kind: IssueKind::MissingCultural,
        required: &[&["cultural", "culture"]],
    },
    Requirement {
        trigger: Trigger::Words(&[
            "ministry",
            "ministerio",
            "alcaldia",
            "gobernacion",
            "government",
            "gobierno",
        ]),
        kind: IssueKind::MissingGovernment,
        required: &[&["government"], &["public-sector"]],
    },
    Requirement {
        trigger: Trigger::Words(&["university", "universidad", "college", "institute"]),
        kind: IssueKind::MissingEducation,
        required: &[&["education"], &["university"]],
    },
    Requirement {
        trigger: Trigger::Words(&["restaurant", "food", "cocina", "cafe", "coffee"]),
        kind: IssueKind::MissingFood,
        required: &[&["food"], &["restaurant"]],
    },
    Requirement {
        trigger: Trigger::AnyTag(SPANISH_SPEAKING),
        kind: IssueKind::MissingLanguage,
        required: &[&["spanish-speaking"]],
    },
    Requirement {
        trigger: Trigger::AnyTag(&["brazil"]),
        kind: IssueKind::MissingLanguage,
        required: &[&["portuguese-speaking"]],
    },
    Requirement {
        trigger: Trigger::AnyTag(&["usa", "uk", "canada", "australia"]),
        kind: IssueKind::MissingLanguage,
        required: &[&["english-speaking"]],
    },
];

/// One missing tag on one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Index into the record slice that was verified
    pub record: usize,
    pub text: String,
    pub url: String,
    pub kind: IssueKind,
    pub tag: String,
}

/// Check every tagged record against the required-tag rules.
///
/// Each (record, tag) pair is reported at most once.
pub fn verify_records(records: &[LinkRecord]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if !record.has_tags_attr() {
            continue;
        }

        let tags = normalize_tags(&record.tags);
        let folded = fold_for_matching(&record.text);
        let flags = flag_codes(&record.text);
        // Tags already reported count as present for later tag-triggered rules.
        let mut pending: BTreeSet<String> = BTreeSet::new();
        let mut missing: Vec<(IssueKind, String)> = Vec::new();

        for rule in RULES {
            let triggered = match rule.trigger {
                Trigger::Flag(code) => flags.iter().any(|flag| flag == code),
                Trigger::Words(words) => words.iter().any(|word| contains_word(&folded, word)),
                Trigger::AnyTag(any) => any
                    .iter()
                    .any(|tag| tags.contains(*tag) || pending.contains(*tag)),
            };
            if !triggered {
                continue;
            }

            for alternatives in rule.required {
                if alternatives.iter().any(|tag| tags.contains(*tag)) {
                    continue;
                }
                let tag = alternatives[0].to_string();
                if pending.insert(tag.clone()) {
                    missing.push((rule.kind, tag));
                }
            }
        }

        if let Some(tag) = record
            .instagram_username()
            .and_then(|name| username_tag(&name))
        {
            if !tags.contains(&tag) && pending.insert(tag.clone()) {
                missing.push((IssueKind::MissingUsername, tag));
            }
        }

        findings.extend(missing.into_iter().map(|(kind, tag)| Finding {
            record: index,
            text: record.display_name().to_string(),
            url: record.url.clone(),
            kind,
            tag,
        }));
    }

    findings
}

/// Findings grouped by issue kind, in enum order.
pub fn group_by_kind(findings: &[Finding]) -> BTreeMap<IssueKind, Vec<&Finding>> {
    let mut groups: BTreeMap<IssueKind, Vec<&Finding>> = BTreeMap::new();
    for finding in findings {
        groups.entry(finding.kind).or_default().push(finding);
    }
    groups
}

/// Result of applying findings to content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub content: String,
    /// How many records gained each tag
    pub added: BTreeMap<String, usize>,
}

/// Union each record's missing tags into its `data-tags` attribute.
///
/// `records` must be the records parsed from `content`.
pub fn apply_findings(content: &str, records: &[LinkRecord], findings: &[Finding]) -> ApplyOutcome {
    let mut missing: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
    for finding in findings {
        missing
            .entry(finding.record)
            .or_default()
            .insert(finding.tag.clone());
    }

    let mut edits = Vec::new();
    let mut added: BTreeMap<String, usize> = BTreeMap::new();

    for (index, tags_to_add) in missing {
        let Some(record) = records.get(index) else {
            continue;
        };
        if !record.has_tags_attr() {
            continue;
        }

        let mut tags = normalize_tags(&record.tags);
        for tag in tags_to_add {
            if tags.insert(tag.clone()) {
                *added.entry(tag).or_default() += 1;
            }
        }
        edits.push(record.tags_edit(&render_tags(&tags)));
    }

    ApplyOutcome {
        content: apply_edits(content, edits),
        added,
    }
}
