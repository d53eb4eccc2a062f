//! Completeness analysis of the link directory

use crate::domain::category::{country_label, Category};
use crate::domain::record::LinkRecord;
use crate::domain::tags::normalize::{contains_word, fold_for_matching};
use std::collections::BTreeMap;

/// Records with fewer tags than this are listed as under-tagged.
pub const MIN_TAG_COUNT: usize = 5;

/// Well-known brands that usually have an official site worth recording.
const BRANDS: &[&str] = &[
    "coca-cola", "pepsi", "nestle", "unilever", "pg", "nike", "adidas", "samsung", "lg", "sony",
    "microsoft", "google", "facebook", "twitter", "netflix", "spotify", "uber", "airbnb",
    "amazon", "mercadolibre", "rappi", "didi", "cabify", "falabella", "exito", "jumbo",
    "carulla", "olimpica", "ara", "d1", "makro", "pricesmart", "homecenter", "easy",
    "constructor", "corona", "argos", "cemex", "ecopetrol", "isagen", "epm", "codensa",
    "gasnatural", "claro", "movistar", "tigo", "virgin", "wom", "avantel", "directv", "telmex",
];

/// A record as it appears in analysis listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub text: String,
    pub username: Option<String>,
}

impl Mention {
    fn of(record: &LinkRecord) -> Self {
        Self {
            text: record.display_name().to_string(),
            username: record.instagram_username(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeReport {
    pub total: usize,
    /// Most common first
    pub categories: Vec<(Category, usize)>,
    /// Most common first
    pub countries: Vec<(&'static str, usize)>,
    /// Username to the display text of every record using it
    pub duplicate_usernames: BTreeMap<String, Vec<String>>,
    pub minimal_tags: Vec<Mention>,
    /// Usernames containing both `_` and `-`
    pub mixed_separators: Vec<Mention>,
    pub brand_matches: Vec<Mention>,
    /// Sorted, unique Instagram usernames
    pub usernames: Vec<String>,
}

pub fn analyze_records(records: &[LinkRecord]) -> AnalyzeReport {
    let mut categories: BTreeMap<Category, usize> = BTreeMap::new();
    let mut countries: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut by_username: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut minimal_tags = Vec::new();
    let mut mixed_separators = Vec::new();
    let mut brand_matches = Vec::new();

    for record in records {
        *categories.entry(Category::from_tags(&record.tags)).or_default() += 1;
        *countries.entry(country_label(&record.text)).or_default() += 1;

        let username = record.instagram_username();
        if let Some(name) = &username {
            by_username
                .entry(name.to_lowercase())
                .or_default()
                .push(record.display_name().to_string());

            if name.contains('_') && name.contains('-') {
                mixed_separators.push(Mention::of(record));
            }
        }

        if record.tags.len() < MIN_TAG_COUNT {
            minimal_tags.push(Mention::of(record));
        }

        if matches_brand(&record.text, username.as_deref()) {
            brand_matches.push(Mention::of(record));
        }
    }

    let usernames: Vec<String> = by_username.keys().cloned().collect();
    let duplicate_usernames = by_username
        .into_iter()
        .filter(|(_, texts)| texts.len() > 1)
        .collect();

    AnalyzeReport {
        total: records.len(),
        categories: by_count(categories),
        countries: by_count(countries),
        duplicate_usernames,
        minimal_tags,
        mixed_separators,
        brand_matches,
        usernames,
    }
}

fn by_count<K: Ord>(counts: BTreeMap<K, usize>) -> Vec<(K, usize)> {
    let mut sorted: Vec<(K, usize)> = counts.into_iter().collect();
    // stable sort keeps key order among equal counts
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Short brand names only match a whole username or a whole word.
fn matches_brand(text: &str, username: Option<&str>) -> bool {
    let folded = fold_for_matching(text);
    let username = username.map(str::to_lowercase);

    BRANDS.iter().any(|brand| {
        let in_username = username.as_deref().is_some_and(|name| {
            if brand.len() >= 4 {
                name.contains(brand)
            } else {
                name == *brand
            }
        });
        in_username || contains_word(&folded, brand)
    })
}

/// Unique usernames across all analyzed records, one per line.
pub fn username_list(report: &AnalyzeReport) -> String {
    report
        .usernames
        .iter()
        .map(|name| format!("{}\n", name))
        .collect()
}
