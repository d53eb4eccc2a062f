//! Tag and text normalization

use std::collections::BTreeSet;

/// Normalize one tag: lowercase, whitespace and underscores become `-`,
/// repeated `-` collapse, leading and trailing `-` are dropped.
///
/// Returns `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let mut tag = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            pending_dash = true;
            continue;
        }
        if pending_dash && !tag.is_empty() {
            tag.push('-');
        }
        pending_dash = false;
        tag.extend(ch.to_lowercase());
    }

    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Normalize a list of tags into a sorted, deduplicated set.
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

/// Serialize a tag set the way it is stored in `data-tags`.
pub fn render_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// True for tags made only of `[a-z0-9-]`.
pub fn is_well_formed(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Replace common Latin accented letters with their base letter.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
            'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
            'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ñ' => 'n',
            'Ñ' => 'N',
            'ç' => 'c',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

/// Lowercased, diacritic-free form used for keyword matching.
pub fn fold_for_matching(text: &str) -> String {
    fold_diacritics(text).to_lowercase()
}

/// Whole-word containment check. Both sides should already be folded.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    haystack.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
