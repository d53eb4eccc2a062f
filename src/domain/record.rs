//! Link records embedded in markdown content

use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::debug;

fn anchor_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<a\s([^>]*)>([^<]*)</a>").unwrap())
}

fn attribute_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"([A-Za-z][A-Za-z0-9_:-]*)\s*=\s*"([^"]*)""#).unwrap())
}

/// Usernames this long or longer are not turned into tags.
pub const MAX_USERNAME_TAG_LEN: usize = 30;

/// One anchor entry in the content file.
///
/// All ranges are byte offsets into the content the record was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// The whole `<a ...>...</a>` element
    pub span: Range<usize>,
    /// The opening `<a ...>` tag
    pub open_tag: Range<usize>,
    /// The display text between the tags
    pub text_range: Range<usize>,
    /// The value of `data-tags`, when the attribute exists
    pub tags_attr: Option<Range<usize>>,
    pub url: String,
    pub tags: Vec<String>,
    pub text: String,
}

impl LinkRecord {
    pub fn has_tags_attr(&self) -> bool {
        self.tags_attr.is_some()
    }

    /// Display text with surrounding whitespace removed.
    pub fn display_name(&self) -> &str {
        self.text.trim()
    }

    /// Instagram handle for profile URLs (`https://instagram.com/<user>/`).
    pub fn instagram_username(&self) -> Option<String> {
        let (_, rest) = self.url.rsplit_once("instagram.com/")?;
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        let name = path.trim_matches('/').split('/').next().unwrap_or_default();

        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Edit that sets the `data-tags` value, adding the attribute if absent.
    pub fn tags_edit(&self, rendered: &str) -> Edit {
        match &self.tags_attr {
            Some(range) => Edit::replace(range.clone(), rendered),
            None => {
                // Insert just before the closing '>' of the opening tag.
                let at = self.open_tag.end - 1;
                Edit::replace(at..at, format!(r#" data-tags="{}""#, rendered))
            }
        }
    }

    /// Edit that replaces the display text.
    pub fn text_edit(&self, text: &str) -> Edit {
        Edit::replace(self.text_range.clone(), text)
    }
}

/// A byte-range replacement in a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn replace(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// Apply non-overlapping edits to `content`.
///
/// Edits may be given in any order. Overlapping edits are a caller bug; the
/// later one in offset order is dropped.
pub fn apply_edits(content: &str, mut edits: Vec<Edit>) -> String {
    if edits.is_empty() {
        return content.to_string();
    }

    edits.sort_by(|a, b| a.range.start.cmp(&b.range.start));

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0usize;

    for edit in edits {
        if edit.range.start < cursor {
            debug!(start = edit.range.start, "dropping overlapping edit");
            continue;
        }
        output.push_str(&content[cursor..edit.range.start]);
        output.push_str(&edit.replacement);
        cursor = edit.range.end;
    }

    output.push_str(&content[cursor..]);
    output
}

/// Extract every link record, skipping anchors inside fenced or inline code.
///
/// Anchors without an `href` or with markup inside their text are not records.
pub fn parse_records(content: &str) -> Vec<LinkRecord> {
    let excluded = code_ranges(content);
    let mut records = Vec::new();

    for captures in anchor_regex().captures_iter(content) {
        let (Some(whole), Some(attrs), Some(text)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        if excluded
            .iter()
            .any(|range| range.start <= whole.start() && whole.start() < range.end)
        {
            continue;
        }

        let mut url = None;
        let mut tags_attr = None;
        for attr in attribute_regex().captures_iter(attrs.as_str()) {
            let (Some(name), Some(value)) = (attr.get(1), attr.get(2)) else {
                continue;
            };
            match name.as_str().to_ascii_lowercase().as_str() {
                "href" => url = Some(value.as_str().to_string()),
                "data-tags" => {
                    tags_attr = Some(attrs.start() + value.start()..attrs.start() + value.end())
                }
                _ => {}
            }
        }

        let Some(url) = url else {
            debug!(offset = whole.start(), "skipping anchor without href");
            continue;
        };

        let tags = tags_attr
            .as_ref()
            .map(|range: &Range<usize>| {
                content[range.clone()]
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        records.push(LinkRecord {
            span: whole.range(),
            open_tag: whole.start()..attrs.end() + 1,
            text_range: text.range(),
            tags_attr,
            url,
            tags,
            text: text.as_str().to_string(),
        });
    }

    records
}

/// Byte ranges of fenced code blocks and inline code spans.
pub fn code_ranges(markdown: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut fence_start: Option<usize> = None;

    for (event, range) in MdParser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => {
                fence_start = Some(range.start);
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(start) = fence_start.take() {
                    ranges.push(start..range.end);
                }
            }
            Event::Code(_) => {
                ranges.push(range.start..range.end);
            }
            _ => {}
        }
    }

    if let Some(start) = fence_start.take() {
        ranges.push(start..markdown.len());
    }

    ranges
}
