//! Record categories and country labels derived from tags and text

use crate::domain::tags::lexicon::flag_codes;
use crate::domain::tags::normalize::{contains_word, fold_for_matching};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Diplomatic,
    Cultural,
    Government,
    FoodAndBeverage,
    Education,
    Travel,
    Organization,
    Other,
}

/// Checked in order; the first category with a matching tag wins.
const CATEGORY_TAGS: &[(Category, &[&str])] = &[
    (Category::Diplomatic, &["embassy", "consulate"]),
    (
        Category::Cultural,
        &["museum", "culture", "cultural", "teatro", "theater", "library"],
    ),
    (Category::Government, &["government", "ministry", "alcaldia"]),
    (Category::FoodAndBeverage, &["food", "restaurant", "coffee"]),
    (Category::Education, &["university", "education"]),
    (Category::Travel, &["travel", "tourism"]),
    (Category::Organization, &["ngo", "organization"]),
];

impl Category {
    /// Category for a record's tag list.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        CATEGORY_TAGS
            .iter()
            .find(|(_, keys)| tags.iter().any(|tag| keys.contains(&tag.as_ref())))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Diplomatic => "Diplomatic",
            Category::Cultural => "Cultural",
            Category::Government => "Government",
            Category::FoodAndBeverage => "Food & Beverage",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Organization => "Organization",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const COUNTRY_LABELS: &[(&str, &[&str], &str)] = &[
    ("CO", &["colombia"], "Colombia"),
    ("MX", &["mexico", "mexican"], "Mexico"),
    ("VE", &["venezuela"], "Venezuela"),
    ("US", &["usa"], "USA"),
    ("BR", &["brazil"], "Brazil"),
    ("AR", &["argentina"], "Argentina"),
    ("CL", &["chile"], "Chile"),
    ("PE", &["peru"], "Peru"),
];

/// Country a record's display text points at, by flag or by name.
///
/// Returns `"Other"` when nothing matches.
pub fn country_label(text: &str) -> &'static str {
    let flags = flag_codes(text);
    let folded = fold_for_matching(text);

    COUNTRY_LABELS
        .iter()
        .find(|(code, names, _)| {
            flags.iter().any(|flag| flag == *code)
                || names.iter().any(|name| contains_word(&folded, name))
        })
        .map(|(_, _, label)| *label)
        .unwrap_or("Other")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_category_wins() {
        assert_eq!(
            Category::from_tags(&["museum", "embassy"]),
            Category::Diplomatic
        );
        assert_eq!(Category::from_tags(&["coffee"]), Category::FoodAndBeverage);
        assert_eq!(Category::from_tags(&["ngo"]), Category::Organization);
        assert_eq!(Category::from_tags::<&str>(&[]), Category::Other);
    }

    #[test]
    fn matches_whole_tags_only() {
        // "multicultural" must not count as "cultural"
        assert_eq!(Category::from_tags(&["multicultural"]), Category::Other);
    }

    #[test]
    fn labels() {
        assert_eq!(Category::FoodAndBeverage.to_string(), "Food & Beverage");
        assert_eq!(Category::Other.label(), "Other");
    }

    #[test]
    fn country_from_flag_or_name() {
        assert_eq!(country_label("🇨🇴 Museo"), "Colombia");
        assert_eq!(country_label("Embajada de México"), "Mexico");
        assert_eq!(country_label("Mexican Cultural Institute"), "Mexico");
        assert_eq!(country_label("🇵🇪 Lima"), "Peru");
        assert_eq!(country_label("Somewhere else"), "Other");
    }
}
