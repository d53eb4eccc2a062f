//! CSV directory export

use crate::domain::category::Category;
use crate::domain::directory::Directory;
use crate::domain::record::LinkRecord;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One CSV row. Field order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Instagram_Username")]
    pub instagram_username: String,
    #[serde(rename = "Instagram_URL")]
    pub instagram_url: String,
    #[serde(rename = "YouTube_URL")]
    pub youtube_url: String,
    #[serde(rename = "Website_URL")]
    pub website_url: String,
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl ExportRow {
    pub fn from_record(record: &LinkRecord, directory: &Directory) -> Self {
        let username = record.instagram_username().unwrap_or_default();
        let youtube_url = directory.youtube_url(&username).unwrap_or_default();
        let website_url = directory.website_url(&username).unwrap_or_default();

        Self {
            name: record.display_name().to_string(),
            category: Category::from_tags(&record.tags).label().to_string(),
            youtube_url: youtube_url.to_string(),
            website_url: website_url.to_string(),
            instagram_username: username,
            instagram_url: record.url.clone(),
            tags: record.tags.join(" "),
        }
    }
}

/// One row per record, in content order.
pub fn export_rows(records: &[LinkRecord], directory: &Directory) -> Vec<ExportRow> {
    records
        .iter()
        .map(|record| ExportRow::from_record(record, directory))
        .collect()
}

/// Write rows with a header line. Returns the number of rows written.
pub fn write_csv<W: Write>(out: W, rows: &[ExportRow]) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    if rows.is_empty() {
        // serde only emits headers alongside the first row
        writer.write_record([
            "Name",
            "Category",
            "Instagram_Username",
            "Instagram_URL",
            "YouTube_URL",
            "Website_URL",
            "Tags",
        ])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::parse_records;

    const PAGE: &str = r#"<a href="https://instagram.com/bancolombia/" data-tags="colombia finance">🇨🇴 Bancolombia, S.A.</a>
<a href="https://instagram.com/museobotero" data-tags="museum colombia">🇨🇴 Museo Botero</a>
<a href="https://example.com">Untagged site</a>"#;

    #[test]
    fn builds_rows_with_category_and_urls() {
        let rows = export_rows(&parse_records(PAGE), &Directory::builtin());
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].instagram_username, "bancolombia");
        assert_eq!(rows[0].website_url, "https://www.bancolombia.com/");
        assert_eq!(rows[0].category, "Other");

        assert_eq!(rows[1].category, "Cultural");
        assert_eq!(rows[1].youtube_url, "https://www.youtube.com/@museobotero");

        assert_eq!(rows[2].instagram_username, "");
        assert_eq!(rows[2].tags, "");
    }

    #[test]
    fn writes_header_and_quotes_fields() {
        let rows = export_rows(&parse_records(PAGE), &Directory::builtin());
        let mut buffer = Vec::new();
        let written = write_csv(&mut buffer, &rows).unwrap();
        assert_eq!(written, 3);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Name,Category,Instagram_Username,Instagram_URL,YouTube_URL,Website_URL,Tags")
        );
        assert!(text.contains("\"🇨🇴 Bancolombia, S.A.\""));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn empty_export_still_has_header() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[]).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("Name,Category"));
    }
}
