//! Static keyword tables used to derive tags from display text
//!
//! Three kinds of lookups feed enrichment:
//! - flags: regional-indicator emoji pairs decoded to ISO 3166 alpha-2 codes
//! - places: country and city names
//! - keywords: organization-type words (embassy, museo, restaurant, ...)
//!
//! Keys written entirely in upper case (`USA`, `DC`, `LA`) match
//! case-sensitively. Every other key matches case-insensitively on word
//! boundaries after folding diacritics.

use super::normalize::{fold_for_matching, normalize_tag, normalize_tags};
use crate::error::{LinkTagsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

type Table = &'static [(&'static str, &'static [&'static str])];
type RuleTable = &'static [(&'static [&'static str], &'static [&'static str])];

const FLAG_TAGS: Table = &[
    ("CO", &["colombia", "colombian", "co", "south-america", "latin-america", "andean", "spanish-speaking"]),
    ("MX", &["mexico", "mexican", "mx", "north-america", "latin-america", "spanish-speaking", "nafta"]),
    ("VE", &["venezuela", "venezuelan", "ve", "south-america", "latin-america", "spanish-speaking", "caribbean"]),
    ("US", &["usa", "united-states", "american", "north-america", "english-speaking"]),
    ("BR", &["brazil", "south-america", "latin-america", "portuguese-speaking"]),
    ("AR", &["argentina", "south-america", "latin-america", "spanish-speaking", "southern-cone"]),
    ("CL", &["chile", "south-america", "latin-america", "spanish-speaking", "southern-cone", "pacific"]),
    ("PE", &["peru", "south-america", "latin-america", "spanish-speaking", "andean", "pacific"]),
    ("EC", &["ecuador", "south-america", "latin-america", "spanish-speaking", "andean"]),
    ("BO", &["bolivia", "south-america", "latin-america", "spanish-speaking", "andean", "landlocked"]),
    ("PY", &["paraguay", "south-america", "latin-america", "spanish-speaking", "landlocked"]),
    ("UY", &["uruguay", "south-america", "latin-america", "spanish-speaking", "southern-cone"]),
    ("DO", &["dominican-republic", "caribbean", "latin-america", "spanish-speaking", "island"]),
    ("CU", &["cuba", "caribbean", "latin-america", "spanish-speaking", "island"]),
    ("PA", &["panama", "central-america", "latin-america", "spanish-speaking"]),
    ("GT", &["guatemala", "central-america", "latin-america", "spanish-speaking"]),
    ("SV", &["el-salvador", "central-america", "latin-america", "spanish-speaking"]),
    ("ES", &["spain", "europe", "eu", "spanish-speaking", "iberian", "mediterranean"]),
    ("FR", &["france", "europe", "eu", "french-speaking", "western-europe"]),
    ("DE", &["germany", "europe", "eu", "german-speaking", "central-europe"]),
    ("IT", &["italy", "europe", "eu", "italian-speaking", "mediterranean"]),
    ("GB", &["uk", "united-kingdom", "europe", "english-speaking", "british"]),
    ("CA", &["canada", "north-america", "english-speaking", "french-speaking", "commonwealth"]),
    ("JP", &["japan", "asia", "east-asia", "japanese-speaking", "pacific"]),
    ("KR", &["korea", "south-korea", "asia", "east-asia", "korean-speaking"]),
    ("CN", &["china", "asia", "east-asia", "chinese-speaking"]),
    ("IN", &["india", "asia", "south-asia", "english-speaking", "commonwealth"]),
    ("AU", &["australia", "oceania", "english-speaking", "commonwealth", "pacific"]),
    ("EU", &["eu", "european-union", "europe"]),
    ("UN", &["un", "united-nations", "international", "multilateral"]),
];

const COUNTRY_TAGS: Table = &[
    ("Mexico", &["mexico", "mexican", "north-america", "latin-america", "nafta"]),
    ("Colombia", &["colombia", "colombian", "south-america", "latin-america", "andean"]),
    ("Venezuela", &["venezuela", "venezuelan", "south-america", "latin-america", "caribbean"]),
    ("USA", &["usa", "united-states", "american", "north-america"]),
    ("US", &["usa", "united-states", "american", "north-america"]),
    ("United States", &["usa", "united-states", "american", "north-america"]),
    ("Canada", &["canada", "canadian", "north-america", "commonwealth"]),
    ("Brazil", &["brazil", "brazilian", "south-america", "latin-america", "portuguese"]),
    ("Argentina", &["argentina", "argentinian", "south-america", "latin-america", "southern-cone"]),
    ("Chile", &["chile", "chilean", "south-america", "latin-america", "pacific", "southern-cone"]),
    ("Peru", &["peru", "peruvian", "south-america", "latin-america", "andean", "pacific"]),
    ("Ecuador", &["ecuador", "ecuadorian", "south-america", "latin-america", "andean"]),
    ("Bolivia", &["bolivia", "bolivian", "south-america", "latin-america", "andean", "landlocked"]),
    ("Uruguay", &["uruguay", "uruguayan", "south-america", "latin-america", "southern-cone"]),
    ("Paraguay", &["paraguay", "paraguayan", "south-america", "latin-america", "landlocked"]),
    ("Guatemala", &["guatemala", "guatemalan", "central-america", "latin-america"]),
    ("El Salvador", &["el-salvador", "salvadoran", "central-america", "latin-america"]),
    ("Honduras", &["honduras", "honduran", "central-america", "latin-america"]),
    ("Nicaragua", &["nicaragua", "nicaraguan", "central-america", "latin-america"]),
    ("Costa Rica", &["costa-rica", "costa-rican", "central-america", "latin-america"]),
    ("Panama", &["panama", "panamanian", "central-america", "latin-america"]),
    ("Cuba", &["cuba", "cuban", "caribbean", "latin-america", "island"]),
    ("Dominican Republic", &["dominican-republic", "dominican", "caribbean", "latin-america", "island"]),
    ("Spain", &["spain", "spanish", "europe", "iberian", "eu", "mediterranean"]),
    ("France", &["france", "french", "europe", "eu", "western-europe"]),
    ("Germany", &["germany", "german", "europe", "eu", "central-europe"]),
    ("Italy", &["italy", "italian", "europe", "eu", "mediterranean"]),
    ("UK", &["uk", "britain", "british", "europe", "commonwealth"]),
    ("Britain", &["uk", "britain", "british", "europe", "commonwealth"]),
    ("Ireland", &["ireland", "irish", "europe", "eu"]),
    ("Belgium", &["belgium", "belgian", "europe", "eu", "benelux"]),
    ("Netherlands", &["netherlands", "dutch", "europe", "eu", "benelux"]),
    ("Switzerland", &["switzerland", "swiss", "europe", "alpine", "neutral"]),
    ("Austria", &["austria", "austrian", "europe", "eu", "alpine"]),
    ("Denmark", &["denmark", "danish", "europe", "eu", "nordic", "scandinavia"]),
    ("Sweden", &["sweden", "swedish", "europe", "eu", "nordic", "scandinavia"]),
    ("Norway", &["norway", "norwegian", "europe", "nordic", "scandinavia"]),
    ("Finland", &["finland", "finnish", "europe", "eu", "nordic"]),
    ("Poland", &["poland", "polish", "europe", "eu", "eastern-europe"]),
    ("Ukraine", &["ukraine", "ukrainian", "europe", "eastern-europe"]),
    ("Russia", &["russia", "russian", "eurasia", "eastern-europe"]),
    ("Japan", &["japan", "japanese", "asia", "east-asia", "pacific"]),
    ("China", &["china", "chinese", "asia", "east-asia"]),
    ("Korea", &["korea", "korean", "asia", "east-asia"]),
    ("India", &["india", "indian", "asia", "south-asia", "commonwealth"]),
    ("Australia", &["australia", "australian", "oceania", "commonwealth", "pacific"]),
    ("New Zealand", &["new-zealand", "kiwi", "oceania", "commonwealth", "pacific"]),
    ("South Africa", &["south-africa", "african", "africa", "commonwealth"]),
    ("Ghana", &["ghana", "ghanaian", "africa", "west-africa", "commonwealth"]),
    ("Lebanon", &["lebanon", "lebanese", "middle-east", "arab", "mediterranean"]),
    ("Jordan", &["jordan", "jordanian", "middle-east", "arab"]),
    ("Qatar", &["qatar", "qatari", "middle-east", "arab", "gulf"]),
    ("UAE", &["uae", "emirates", "middle-east", "arab", "gulf"]),
    ("Turkey", &["turkey", "turkish", "middle-east", "mediterranean", "eurasia"]),
    ("Israel", &["israel", "israeli", "middle-east", "mediterranean"]),
    ("Barbados", &["barbados", "barbadian", "caribbean", "island", "commonwealth"]),
    ("EU", &["eu", "european-union", "europe"]),
];

const CITY_TAGS: Table = &[
    // Colombia
    ("Bogota", &["bogota", "colombia", "south-america", "andean", "capital-city", "distrito-capital"]),
    ("Medellin", &["medellin", "colombia", "antioquia", "south-america", "city-of-eternal-spring"]),
    ("Cali", &["cali", "colombia", "valle-del-cauca", "south-america", "pacific", "salsa-capital"]),
    ("Barranquilla", &["barranquilla", "colombia", "atlantico", "south-america", "caribbean", "caribbean-coast", "golden-gate"]),
    ("Cartagena", &["cartagena", "colombia", "bolivar", "south-america", "caribbean-coast", "unesco-heritage", "heroic-city", "caribbean", "coast"]),
    ("Bucaramanga", &["bucaramanga", "colombia", "santander", "south-america", "city-of-parks"]),
    ("Pereira", &["pereira", "colombia", "risaralda", "south-america", "coffee-region", "coffee-axis"]),
    ("Manizales", &["manizales", "colombia", "caldas", "south-america", "coffee-region", "coffee-axis"]),
    ("Armenia", &["armenia", "colombia", "quindio", "south-america", "coffee-region", "coffee-axis"]),
    ("Ibague", &["ibague", "colombia", "tolima", "south-america"]),
    ("Villavicencio", &["villavicencio", "colombia", "meta", "south-america", "llanos"]),
    ("Pasto", &["pasto", "colombia", "narino", "south-america", "andes"]),
    ("Monteria", &["monteria", "colombia", "cordoba", "south-america"]),
    ("Valledupar", &["valledupar", "colombia", "cesar", "south-america"]),
    ("Tunja", &["tunja", "colombia", "boyaca", "south-america", "andes"]),
    ("Popayan", &["popayan", "colombia", "cauca", "south-america", "white-city"]),
    ("Neiva", &["neiva", "colombia", "huila", "south-america"]),
    ("Riohacha", &["riohacha", "colombia", "la-guajira", "south-america", "caribbean"]),
    ("Sincelejo", &["sincelejo", "colombia", "sucre", "south-america"]),
    ("Yopal", &["yopal", "colombia", "casanare", "south-america", "llanos"]),
    ("Florencia", &["florencia", "colombia", "caqueta", "south-america", "amazon"]),
    ("Arauca", &["arauca", "colombia", "south-america", "llanos", "border"]),
    ("Mocoa", &["mocoa", "colombia", "putumayo", "south-america", "amazon"]),
    ("Leticia", &["leticia", "colombia", "amazonas", "south-america", "amazon", "tri-border"]),
    ("Quibdo", &["quibdo", "colombia", "choco", "south-america", "pacific", "rainforest"]),
    ("San Andres", &["san-andres", "colombia", "caribbean", "island"]),
    ("Santa Marta", &["santa-marta", "colombia", "magdalena", "south-america", "caribbean-coast", "caribbean", "coast"]),
    // Mexico
    ("Mexico City", &["mexico-city", "cdmx", "mexico", "north-america", "capital-city", "megalopolis", "capital"]),
    ("CDMX", &["mexico-city", "cdmx", "mexico", "north-america", "capital-city"]),
    ("Guadalajara", &["guadalajara", "mexico", "jalisco", "pearl-of-west"]),
    ("Monterrey", &["monterrey", "mexico", "nuevo-leon", "sultan-of-north"]),
    // United States
    ("Washington", &["washington-dc", "usa", "north-america", "capital-city", "district-columbia", "capital"]),
    ("DC", &["washington-dc", "usa", "north-america", "capital-city", "district-columbia", "capital"]),
    ("Seattle", &["seattle", "usa", "north-america", "washington-state", "pacific-northwest", "emerald-city", "washington"]),
    ("Atlanta", &["atlanta", "usa", "georgia", "north-america", "southeast", "peach-state"]),
    ("Boston", &["boston", "usa", "massachusetts", "north-america", "new-england", "beantown"]),
    ("Los Angeles", &["los-angeles", "usa", "california", "north-america", "west-coast", "city-of-angels", "la"]),
    ("LA", &["los-angeles", "usa", "california", "north-america", "west-coast"]),
    ("New York", &["new-york", "usa", "nyc", "north-america", "big-apple", "empire-state"]),
    ("Chicago", &["chicago", "usa", "illinois", "north-america", "windy-city", "midwest"]),
    ("Miami", &["miami", "usa", "florida", "north-america", "magic-city", "southeast"]),
    ("Houston", &["houston", "usa", "texas", "north-america"]),
    // Canada
    ("Ottawa", &["ottawa", "canada", "north-america", "ontario", "capital-city"]),
    // Central America and the Caribbean
    ("Guatemala City", &["guatemala-city", "guatemala", "central-america", "capital-city"]),
    ("San Salvador", &["san-salvador", "el-salvador", "central-america", "capital-city"]),
    // South America
    ("Caracas", &["caracas", "venezuela", "south-america", "capital-city", "caribbean", "santiago-de-leon"]),
    ("Quito", &["quito", "ecuador", "south-america", "andes", "capital-city", "middle-of-world"]),
    ("Lima", &["lima", "peru", "south-america", "pacific", "capital-city", "city-of-kings"]),
    ("La Paz", &["la-paz", "bolivia", "south-america", "andes", "administrative-capital", "highest-capital"]),
    ("Santiago", &["santiago", "chile", "south-america", "pacific", "capital-city", "metropolitan-region"]),
    ("Buenos Aires", &["buenos-aires", "argentina", "south-america", "rio-de-la-plata", "capital-city", "paris-of-south"]),
    ("Montevideo", &["montevideo", "uruguay", "south-america", "rio-de-la-plata", "capital-city"]),
    ("Sao Paulo", &["sao-paulo", "brazil", "south-america", "sampa", "concrete-jungle"]),
    ("Rio de Janeiro", &["rio-de-janeiro", "brazil", "south-america", "marvelous-city"]),
    ("Rio", &["rio-de-janeiro", "brazil", "marvelous-city", "cidade-maravilhosa"]),
    // Europe
    ("Madrid", &["madrid", "spain", "europe", "iberian", "capital-city", "villa-y-corte"]),
    ("Paris", &["paris", "france", "europe", "western-europe", "capital-city", "city-of-light"]),
    ("Rome", &["rome", "italy", "europe", "mediterranean", "capital-city", "eternal-city"]),
    ("London", &["london", "uk", "britain", "europe", "england", "capital-city", "great-britain"]),
    ("Berlin", &["berlin", "germany", "europe", "capital-city", "hauptstadt"]),
    ("Vienna", &["vienna", "austria", "europe", "central-europe", "capital-city"]),
    ("Copenhagen", &["copenhagen", "denmark", "europe", "scandinavia", "nordic", "capital-city"]),
    // Asia, Africa and the Middle East
    ("Tokyo", &["tokyo", "japan", "asia", "east-asia", "capital-city", "greater-tokyo"]),
    ("Seoul", &["seoul", "korea", "south-korea", "asia", "east-asia", "capital-city", "special-city"]),
    ("Beijing", &["beijing", "china", "asia", "east-asia", "capital-city", "peking"]),
    ("New Delhi", &["new-delhi", "india", "asia", "south-asia", "capital-city", "ncr"]),
    ("Beirut", &["beirut", "lebanon", "middle-east", "mediterranean", "capital-city", "paris-of-middle-east"]),
    ("Accra", &["accra", "ghana", "africa", "west-africa", "capital-city"]),
];

const KEYWORD_RULES: RuleTable = &[
    // Diplomatic
    (&["embassy", "embajada", "embaixada", "ambassade"], &["embassy", "diplomatic", "foreign-affairs", "international-relations", "bilateral"]),
    (&["consulate", "consulado", "consulat"], &["consulate", "diplomatic", "consular-services", "international"]),
    // Culture
    (&["museum", "museo", "gallery", "galeria"], &["museum", "culture", "art", "heritage", "education", "tourism"]),
    (&["theater", "theatre", "teatro"], &["theater", "culture", "performing-arts", "entertainment"]),
    (&["library", "biblioteca"], &["library", "education", "culture", "research", "books"]),
    (&["cultural", "cultura"], &["culture", "cultural-center", "arts"]),
    (&["archive", "archivo"], &["archive", "history", "culture", "research", "heritage"]),
    // Government
    (&["ministry", "ministerio", "department", "departamento"], &["government", "ministry", "public-sector", "administration"]),
    (&["governor", "gobernador", "gobernacion"], &["government", "local-government", "politics", "administration"]),
    (&["alcaldia", "alcalde", "mayor"], &["municipality", "local-government", "city-hall", "administration"]),
    (&["tourism", "turismo", "tourist"], &["tourism", "travel", "visitor", "destination"]),
    // Education
    (&["university", "universidad", "college", "school"], &["education", "university", "academic", "higher-education", "research"]),
    (&["institute", "instituto"], &["education", "institute", "research", "academic"]),
    // Food
    (&["restaurant", "restaurante"], &["food", "restaurant", "dining", "hospitality", "gastronomy", "cuisine"]),
    (&["food", "comida", "cocina", "kitchen"], &["food", "cuisine", "gastronomy"]),
    (&["coffee", "cafe"], &["coffee", "cafe", "beverages", "dining"]),
    (&["bakery", "panaderia", "pasteleria"], &["food", "bakery", "pastry", "dessert"]),
    (&["pizza"], &["pizza", "italian", "fast-food", "restaurant"]),
    (&["burger", "hamburger"], &["burger", "fast-food", "american", "restaurant"]),
    // Business
    (&["brand", "marca", "company", "empresa"], &["business", "brand", "commercial", "corporate"]),
    (&["store", "tienda", "shop"], &["retail", "shopping", "commerce", "business"]),
    // Media
    (&["news", "noticias", "media", "press"], &["media", "news", "journalism", "communication"]),
    (&["radio", "tv", "television"], &["media", "broadcasting", "entertainment", "communication"]),
    // Travel
    (&["travel", "viaje", "trip"], &["travel", "tourism", "destination", "adventure"]),
    (&["hotel", "hostel", "accommodation"], &["hospitality", "accommodation", "tourism", "travel"]),
    // Technology
    (&["tech", "technology", "digital"], &["technology", "tech", "innovation", "digital"]),
    (&["AI", "artificial intelligence"], &["ai", "artificial-intelligence", "technology", "innovation"]),
];

/// Tags implied by other tags; applied until nothing new is added.
const TAG_IMPLICATIONS: RuleTable = &[
    (
        &["mexico", "colombia", "venezuela", "spain", "argentina", "chile", "peru", "ecuador", "bolivia", "uruguay", "paraguay", "cuba", "panama", "guatemala", "el-salvador", "honduras", "nicaragua", "costa-rica", "dominican-republic"],
        &["spanish-speaking"],
    ),
    (&["brazil"], &["portuguese-speaking"]),
    (&["usa", "uk", "canada", "australia"], &["english-speaking"]),
    (&["france"], &["french-speaking"]),
    (&["embassy", "consulate"], &["diplomatic"]),
];

/// User-supplied additions to the builtin tables, read from `linktags.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconOverrides {
    /// ISO alpha-2 code (or the flag emoji itself) to tags
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, Vec<String>>,
    /// Country or city name to tags
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub places: BTreeMap<String, Vec<String>>,
    /// Organization keyword to tags
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl LexiconOverrides {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.places.is_empty() && self.keywords.is_empty()
    }
}

/// A compiled word matcher and the tags it contributes.
#[derive(Debug, Clone)]
struct KeywordRule {
    /// Matched against the folded, lowercased text
    folded: Option<Regex>,
    /// Matched against the raw text (upper-case acronyms)
    exact: Option<Regex>,
    tags: BTreeSet<String>,
}

impl KeywordRule {
    fn compile(words: &[&str], tags: &[&str]) -> Result<Self> {
        let (acronyms, words): (Vec<&str>, Vec<&str>) =
            words.iter().copied().partition(|word| is_acronym(word));

        let folded: Vec<String> = words.iter().map(|word| fold_for_matching(word)).collect();

        Ok(Self {
            folded: word_regex(&folded)?,
            exact: word_regex(&acronyms)?,
            tags: normalize_tags(tags),
        })
    }

    fn matches(&self, text: &str, folded: &str) -> bool {
        self.exact.as_ref().is_some_and(|re| re.is_match(text))
            || self.folded.as_ref().is_some_and(|re| re.is_match(folded))
    }
}

fn is_acronym(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

fn word_regex<S: AsRef<str>>(words: &[S]) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }

    let alternation = words
        .iter()
        .map(|word| regex::escape(word.as_ref()))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"\b(?:{})\b", alternation))
        .map(Some)
        .map_err(|e| LinkTagsError::Config(format!("Invalid lexicon keyword: {}", e)))
}

/// Compiled lookup tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    flags: BTreeMap<String, BTreeSet<String>>,
    places: Vec<KeywordRule>,
    keywords: Vec<KeywordRule>,
    implications: Vec<(BTreeSet<String>, BTreeSet<String>)>,
}

impl Lexicon {
    /// The builtin tables with no user additions.
    pub fn builtin() -> Result<Self> {
        Self::with_overrides(&LexiconOverrides::default())
    }

    /// The builtin tables extended with entries from the config file.
    ///
    /// Override entries add to builtin entries with the same key.
    pub fn with_overrides(overrides: &LexiconOverrides) -> Result<Self> {
        let mut flags: BTreeMap<String, BTreeSet<String>> = FLAG_TAGS
            .iter()
            .map(|(code, tags)| (code.to_string(), normalize_tags(tags.iter())))
            .collect();
        for (key, tags) in &overrides.flags {
            let code = flag_codes(key)
                .into_iter()
                .next()
                .unwrap_or_else(|| key.trim().to_ascii_uppercase());
            flags
                .entry(code)
                .or_default()
                .extend(normalize_tags(tags.iter()));
        }

        let mut places = Vec::with_capacity(COUNTRY_TAGS.len() + CITY_TAGS.len());
        for (name, tags) in COUNTRY_TAGS.iter().chain(CITY_TAGS.iter()) {
            places.push(KeywordRule::compile(&[*name], tags)?);
        }
        for (name, tags) in &overrides.places {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            places.push(KeywordRule::compile(&[name.as_str()], &tags)?);
        }

        let mut keywords = Vec::with_capacity(KEYWORD_RULES.len());
        for (words, tags) in KEYWORD_RULES.iter() {
            keywords.push(KeywordRule::compile(words, tags)?);
        }
        for (word, tags) in &overrides.keywords {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            keywords.push(KeywordRule::compile(&[word.as_str()], &tags)?);
        }

        let implications = TAG_IMPLICATIONS
            .iter()
            .map(|(when, then)| (normalize_tags(when.iter()), normalize_tags(then.iter())))
            .collect();

        Ok(Self {
            flags,
            places,
            keywords,
            implications,
        })
    }

    /// Every tag the text implies through flags, places, and keywords.
    pub fn tags_for_text(&self, text: &str) -> BTreeSet<String> {
        let folded = fold_for_matching(text);
        let mut tags = BTreeSet::new();

        for code in flag_codes(text) {
            if let Some(flag_tags) = self.flags.get(&code) {
                tags.extend(flag_tags.iter().cloned());
            }
        }

        for rule in self.places.iter().chain(self.keywords.iter()) {
            if rule.matches(text, &folded) {
                tags.extend(rule.tags.iter().cloned());
            }
        }

        tags
    }

    /// Add implied tags until the set stops growing.
    pub fn apply_implications(&self, tags: &mut BTreeSet<String>) {
        loop {
            let before = tags.len();
            for (when, then) in &self.implications {
                if when.iter().any(|tag| tags.contains(tag)) {
                    tags.extend(then.iter().cloned());
                }
            }
            if tags.len() == before {
                break;
            }
        }
    }
}

/// Decode regional-indicator pairs (🇨🇴) into ISO alpha-2 codes (`CO`).
pub fn flag_codes(text: &str) -> Vec<String> {
    const BASE: u32 = 0x1F1E6;

    let mut codes = Vec::new();
    let mut pending: Option<char> = None;

    for ch in text.chars() {
        let value = ch as u32;
        if !(BASE..=BASE + 25).contains(&value) {
            pending = None;
            continue;
        }

        let letter = char::from_u32('A' as u32 + (value - BASE)).unwrap_or('?');
        match pending.take() {
            Some(first) => codes.push(format!("{}{}", first, letter)),
            None => pending = Some(letter),
        }
    }

    codes
}

/// Normalized username tag for a handle, if short enough to be useful.
pub fn username_tag(username: &str) -> Option<String> {
    if username.chars().count() >= crate::domain::record::MAX_USERNAME_TAG_LEN {
        return None;
    }
    normalize_tag(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::builtin().unwrap()
    }

    #[test]
    fn decodes_flag_pairs() {
        assert_eq!(flag_codes("🇨🇴 Museo"), vec!["CO"]);
        assert_eq!(flag_codes("🇲🇽🇺🇸 twin"), vec!["MX", "US"]);
        assert!(flag_codes("no flags").is_empty());
    }

    #[test]
    fn flag_derives_country() {
        let tags = lexicon().tags_for_text("🇨🇴 Museo Botero");
        assert!(tags.contains("colombia"));
        assert!(tags.contains("south-america"));
        assert!(tags.contains("museum"));
    }

    #[test]
    fn embassy_keyword_derives_diplomatic() {
        let tags = lexicon().tags_for_text("Embassy of Mexico");
        assert!(tags.contains("embassy"));
        assert!(tags.contains("diplomatic"));
        assert!(tags.contains("mexico"));
    }

    #[test]
    fn city_matching_folds_accents() {
        let tags = lexicon().tags_for_text("Alcaldía de Bogotá");
        assert!(tags.contains("bogota"));
        assert!(tags.contains("municipality"));
    }

    #[test]
    fn acronyms_match_case_sensitively() {
        let lex = lexicon();
        assert!(lex.tags_for_text("Consulate of Mexico in LA").contains("los-angeles"));
        let la_paz = lex.tags_for_text("Alcaldía La Paz");
        assert!(la_paz.contains("la-paz"));
        assert!(!la_paz.contains("los-angeles"));
    }

    #[test]
    fn city_table_carries_regional_nicknames() {
        let lex = lexicon();
        let armenia = lex.tags_for_text("Cámara de Comercio de Armenia");
        assert!(armenia.contains("quindio"));
        assert!(armenia.contains("coffee-axis"));

        assert!(lex.tags_for_text("Consulado en Rio").contains("cidade-maravilhosa"));
        assert!(!lex.tags_for_text("Riohacha").contains("brazil"));
        assert!(lex.tags_for_text("Gobernación de Arauca").contains("llanos"));
        assert!(lex.tags_for_text("Alcaldía de Florencia").contains("caqueta"));
        assert!(lex.tags_for_text("Boston Symphony").contains("beantown"));
        assert!(lex.tags_for_text("La Paz").contains("highest-capital"));
    }

    #[test]
    fn words_do_not_match_inside_other_words() {
        let tags = lexicon().tags_for_text("California Wine Club");
        assert!(!tags.contains("cali"));
    }

    #[test]
    fn implications_reach_fixpoint() {
        let lex = lexicon();
        let mut tags = normalize_tags(["colombia", "consulate"]);
        lex.apply_implications(&mut tags);
        assert!(tags.contains("spanish-speaking"));
        assert!(tags.contains("diplomatic"));
    }

    #[test]
    fn overrides_extend_builtin_tables() {
        let mut overrides = LexiconOverrides::default();
        overrides
            .places
            .insert("Cuenca".to_string(), vec!["cuenca".to_string(), "ecuador".to_string()]);
        overrides
            .keywords
            .insert("cerveceria".to_string(), vec!["brewery".to_string()]);
        overrides
            .flags
            .insert("🇳🇮".to_string(), vec!["Nicaragua".to_string()]);

        let lex = Lexicon::with_overrides(&overrides).unwrap();
        let tags = lex.tags_for_text("🇳🇮 Cervecería de Cuenca");
        assert!(tags.contains("cuenca"));
        assert!(tags.contains("brewery"));
        assert!(tags.contains("nicaragua"));
    }

    #[test]
    fn username_tag_skips_long_handles() {
        assert_eq!(username_tag("embamex_italia").as_deref(), Some("embamex-italia"));
        assert_eq!(username_tag(&"x".repeat(30)), None);
    }
}
