//! Display-order and display-text passes over link grids

use crate::domain::record::{apply_edits, code_ranges, parse_records, Edit, LinkRecord};
use regex::Regex;
use std::sync::OnceLock;

fn grid_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"(?s)<div class="link-grid">(.*?)</div>"#).unwrap())
}

/// Remove flag, pictograph, variation-selector and zero-width-joiner characters.
pub fn strip_emoji(text: &str) -> String {
    text.chars()
        .filter(|ch| {
            !matches!(
                *ch as u32,
                0x1F1E0..=0x1F1FF | 0x1F300..=0x1F9FF | 0xFE0F | 0x200D
            )
        })
        .collect()
}

/// Key anchors are ordered by inside a grid.
pub fn sort_key(text: &str) -> String {
    strip_emoji(text).trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub content: String,
    /// Grids found outside code
    pub grids: usize,
    /// Grids whose order changed
    pub reordered: usize,
    /// 1-based line numbers of grids left alone because they hold more than anchors
    pub skipped: Vec<usize>,
}

/// Sort the anchors of every `link-grid` block by [`sort_key`].
///
/// Anchors trade places; the whitespace between them stays where it was.
/// The sort is stable, so equal keys keep their relative order.
pub fn sort_link_grids(content: &str) -> SortOutcome {
    let records = parse_records(content);
    let excluded = code_ranges(content);
    let mut edits: Vec<Edit> = Vec::new();
    let mut grids = 0usize;
    let mut reordered = 0usize;
    let mut skipped = Vec::new();

    for captures in grid_regex().captures_iter(content) {
        let Some(inner) = captures.get(1) else {
            continue;
        };
        if excluded
            .iter()
            .any(|range| range.start <= inner.start() && inner.start() < range.end)
        {
            continue;
        }
        grids += 1;

        let members: Vec<&LinkRecord> = records
            .iter()
            .filter(|r| r.span.start >= inner.start() && r.span.end <= inner.end())
            .collect();

        if !only_whitespace_between(content, inner.range(), &members) {
            skipped.push(line_number(content, inner.start()));
            continue;
        }

        let mut sorted = members.clone();
        sorted.sort_by_cached_key(|record| sort_key(&record.text));

        if sorted
            .iter()
            .zip(members.iter())
            .all(|(a, b)| a.span == b.span)
        {
            continue;
        }
        reordered += 1;

        for (slot, record) in members.iter().zip(sorted.iter()) {
            if slot.span != record.span {
                edits.push(Edit::replace(
                    slot.span.clone(),
                    &content[record.span.clone()],
                ));
            }
        }
    }

    SortOutcome {
        content: apply_edits(content, edits),
        grids,
        reordered,
        skipped,
    }
}

fn only_whitespace_between(
    content: &str,
    inner: std::ops::Range<usize>,
    members: &[&LinkRecord],
) -> bool {
    let mut cursor = inner.start;
    for record in members {
        if !content[cursor..record.span.start].trim().is_empty() {
            return false;
        }
        cursor = record.span.end;
    }
    content[cursor..inner.end].trim().is_empty()
}

fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub content: String,
    pub records: usize,
    pub cleaned: usize,
}

/// Cut display text at the first `•` and trim what is left.
pub fn clean_locations(content: &str) -> CleanOutcome {
    let records = parse_records(content);
    let edits: Vec<Edit> = records
        .iter()
        .filter_map(|record| {
            let kept = match record.text.split_once('•') {
                Some((name, _)) => name,
                None => record.text.as_str(),
            }
            .trim();

            (kept != record.text).then(|| record.text_edit(kept))
        })
        .collect();

    CleanOutcome {
        records: records.len(),
        cleaned: edits.len(),
        content: apply_edits(content, edits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = r#"## Museums

<div class="link-grid">
    <a href="https://c.com" data-tags="x">🇨🇴 Zoológico</a>
    <a href="https://a.com" data-tags="y">🇲🇽 alameda</a>
    <a href="https://b.com" data-tags="z">Botero</a>
</div>
"#;

    fn texts(content: &str) -> Vec<String> {
        parse_records(content)
            .into_iter()
            .map(|r| r.display_name().to_string())
            .collect()
    }

    #[test]
    fn sort_key_ignores_emoji_and_case() {
        assert_eq!(sort_key("🇨🇴 Museo Botero "), "museo botero");
        assert_eq!(sort_key("🏛️ Palacio"), "palacio");
        assert_eq!(strip_emoji("A\u{200D}B"), "AB");
    }

    #[test]
    fn sorts_grid_and_keeps_whitespace() {
        let outcome = sort_link_grids(GRID);
        assert_eq!(outcome.grids, 1);
        assert_eq!(outcome.reordered, 1);
        assert_eq!(
            texts(&outcome.content),
            vec!["🇲🇽 alameda", "Botero", "🇨🇴 Zoológico"]
        );
        assert!(outcome.content.contains("<div class=\"link-grid\">\n    <a href=\"https://a.com\""));
        assert!(outcome.content.ends_with("</a>\n</div>\n"));
        assert_eq!(outcome.content.len(), GRID.len());
    }

    #[test]
    fn sorting_is_idempotent() {
        let once = sort_link_grids(GRID);
        let twice = sort_link_grids(&once.content);
        assert_eq!(once.content, twice.content);
        assert_eq!(twice.reordered, 0);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let content = r#"<div class="link-grid">
<a href="https://1.com">🇨🇴 Same</a>
<a href="https://2.com">🇲🇽 same</a>
<a href="https://0.com">Alpha</a>
</div>"#;
        let outcome = sort_link_grids(content);
        let urls: Vec<String> = parse_records(&outcome.content)
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, vec!["https://0.com", "https://1.com", "https://2.com"]);
    }

    #[test]
    fn skips_grids_with_other_content() {
        let content = r#"<div class="link-grid">
<a href="https://b.com">B</a>
<!-- note -->
<a href="https://a.com">A</a>
</div>"#;
        let outcome = sort_link_grids(content);
        assert_eq!(outcome.skipped, vec![1]);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn ignores_records_outside_grids() {
        let content = "<a href=\"https://z.com\">Z</a>\n<a href=\"https://a.com\">A</a>\n";
        let outcome = sort_link_grids(content);
        assert_eq!(outcome.grids, 0);
        assert_eq!(outcome.content, content);
    }

    #[test]
    fn clean_drops_location_suffix() {
        let content = r#"<a href="https://x.com" data-tags="a">🇨🇴 Museo del Oro • Bogotá</a>
<a href="https://y.com">Plain</a>"#;
        let outcome = clean_locations(content);
        assert_eq!(outcome.records, 2);
        assert_eq!(outcome.cleaned, 1);
        assert!(outcome.content.contains(">🇨🇴 Museo del Oro</a>"));

        let again = clean_locations(&outcome.content);
        assert_eq!(again.cleaned, 0);
        assert_eq!(again.content, outcome.content);
    }
}
