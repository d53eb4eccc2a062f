//! Output formatting utilities

use crate::application::analyze::AnalyzeOutcome;
use crate::application::audit::DedupeReport;
use crate::application::enrich::EnrichReport;
use crate::application::export_csv::ExportReport;
use crate::application::fix_tags::FixReport;
use crate::application::layout::{CleanReport, SortReport};
use crate::application::verify::{VerifyFixReport, VerifyReport};
use crate::application::youtube_map::YoutubeMapReport;
use crate::domain::analyze::Mention;
use crate::domain::tags::audit::RecordRef;
use crate::domain::tags::verify::group_by_kind;
use crate::domain::tags::{AuditReport, Coverage};
use std::fmt::Write;

/// Listings longer than this are truncated with an "and N more" line.
const LIST_LIMIT: usize = 10;

fn dry_run_suffix(dry_run: bool) -> &'static str {
    if dry_run {
        " (dry run, nothing written)"
    } else {
        ""
    }
}

/// Format tag coverage for display
pub fn format_stats(coverage: &Coverage) -> String {
    format!(
        "Total links: {}\nLinks with tags: {}\nCoverage: {:.1}%\n",
        coverage.total,
        coverage.tagged,
        coverage.percent()
    )
}

pub fn format_enrich_report(report: &EnrichReport) -> String {
    let mut output = String::new();
    if report.changes.is_empty() {
        let _ = writeln!(output, "All {} links already up to date", report.records);
    } else {
        let _ = writeln!(
            output,
            "Enriched {} links with {} new tags in {} file(s){}",
            report.changed_records(),
            report.tags_added(),
            report.changes.len(),
            dry_run_suffix(report.dry_run)
        );
        for change in &report.changes {
            let _ = writeln!(
                output,
                "  {}: {} links, {} tags, {} new attributes",
                change.path.display(),
                change.changed_records,
                change.tags_added,
                change.attributes_added
            );
        }
    }
    output.push('\n');
    output.push_str(&format_stats(&report.coverage));
    output
}

pub fn format_fix_report(report: &FixReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Underscores replaced: {}", report.underscore_fixes());
    let _ = writeln!(output, "Type tags added: {}", report.type_tags_added());
    let _ = writeln!(output, "Untagged links tagged: {}", report.untagged_fixed());
    let _ = writeln!(
        output,
        "Total fixes: {}{}",
        report.total(),
        dry_run_suffix(report.dry_run)
    );
    output
}

fn push_limited<T>(output: &mut String, items: &[T], line: impl Fn(&T) -> String) {
    for item in items.iter().take(LIST_LIMIT) {
        let _ = writeln!(output, "  {}", line(item));
    }
    if items.len() > LIST_LIMIT {
        let _ = writeln!(output, "  ... and {} more", items.len() - LIST_LIMIT);
    }
}

fn record_line(record: &RecordRef) -> String {
    format!("{} ({})", record.text, record.url)
}

pub fn format_audit_report(report: &AuditReport, top: usize) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Links: {}, with data-tags: {} ({:.1}%)",
        report.coverage.total,
        report.coverage.tagged,
        report.coverage.percent()
    );

    if !report.without_attribute.is_empty() {
        let _ = writeln!(output, "\nLinks without data-tags: {}", report.without_attribute.len());
        push_limited(&mut output, &report.without_attribute, record_line);
    }
    if !report.empty_tags.is_empty() {
        let _ = writeln!(output, "\nLinks with empty tags: {}", report.empty_tags.len());
        push_limited(&mut output, &report.empty_tags, record_line);
    }
    if !report.malformed_tags.is_empty() {
        let _ = writeln!(output, "\nMalformed tags: {}", report.malformed_tags.len());
        push_limited(&mut output, &report.malformed_tags, |(record, tag)| {
            format!("'{}' in {}", tag, record.text)
        });
    }
    if !report.duplicate_tags.is_empty() {
        let _ = writeln!(output, "\nLinks with duplicate tags: {}", report.duplicate_tags.len());
        push_limited(&mut output, &report.duplicate_tags, |(record, dupes)| {
            format!("{}: {}", record.text, dupes.join(", "))
        });
    }
    if !report.missing_basic.is_empty() {
        let _ = writeln!(
            output,
            "\nLinks missing a basic location or type tag: {}",
            report.missing_basic.len()
        );
        push_limited(&mut output, &report.missing_basic, |(record, tags)| {
            format!("{}: {}", record.text, tags.join(" "))
        });
    }

    if !report.frequency.is_empty() {
        let _ = writeln!(output, "\nTop {} tags:", top.min(report.frequency.len()));
        for (tag, count) in report.frequency.iter().take(top) {
            let _ = writeln!(output, "  {:<30} {}", tag, count);
        }
    }

    if !report.rare.is_empty() {
        let _ = writeln!(output, "\nTags used once: {}", report.rare.len());
        let shown: Vec<&str> = report.rare.iter().take(20).map(String::as_str).collect();
        let _ = writeln!(output, "  {}", shown.join(", "));
    }

    if let Some(stats) = &report.stats {
        let _ = writeln!(output, "\nUnique tags: {}", stats.unique);
        let _ = writeln!(output, "Tags per link: avg {:.1}, max {}, min {}", stats.average, stats.max, stats.min);
    }

    let _ = writeln!(output, "\nIssues found: {}", report.issue_count());
    output
}

pub fn format_dedupe_report(report: &DedupeReport) -> String {
    format!(
        "Removed duplicate tags from {} links{}\n",
        report.records_fixed,
        dry_run_suffix(report.dry_run)
    )
}

pub fn format_verify_report(report: &VerifyReport) -> String {
    if report.is_clean() {
        return format!("All {} links carry their required tags\n", report.records);
    }

    let mut output = String::new();
    let findings: Vec<_> = report.findings().cloned().collect();
    for (kind, group) in group_by_kind(&findings) {
        let _ = writeln!(output, "{} ({}):", kind, group.len());
        push_limited(&mut output, &group, |finding| {
            format!("{}: add '{}'", finding.text, finding.tag)
        });
        output.push('\n');
    }
    let _ = writeln!(
        output,
        "{} missing tags across {} links",
        report.finding_count(),
        report.records
    );
    output
}

pub fn format_verify_fix_report(report: &VerifyFixReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Added missing tags to {} links{}",
        report.records_fixed,
        dry_run_suffix(report.dry_run)
    );
    for (tag, count) in &report.added {
        let _ = writeln!(output, "  {}: {}", tag, count);
    }
    output
}

pub fn format_sort_report(report: &SortReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Sorted {} of {} link grids{}",
        report.reordered,
        report.grids,
        dry_run_suffix(report.dry_run)
    );
    for (path, line) in &report.skipped {
        let _ = writeln!(
            output,
            "  skipped {}:{} (grid holds more than links)",
            path.display(),
            line
        );
    }
    output
}

pub fn format_clean_report(report: &CleanReport) -> String {
    format!(
        "Cleaned location text from {} of {} links{}\n",
        report.cleaned,
        report.records,
        dry_run_suffix(report.dry_run)
    )
}

pub fn format_export_report(report: &ExportReport) -> String {
    format!(
        "Exported {} links to {}\n",
        report.rows,
        report.path.display()
    )
}

pub fn format_youtube_map_report(report: &YoutubeMapReport) -> String {
    let status = if report.changed {
        "Updated"
    } else {
        "Already current:"
    };
    format!(
        "{} {} YouTube mappings in {}{}\n",
        status,
        report.entries,
        report.path.display(),
        dry_run_suffix(report.dry_run && report.changed)
    )
}

fn mention_line(mention: &Mention) -> String {
    match &mention.username {
        Some(name) => format!("{} (@{})", mention.text, name),
        None => mention.text.clone(),
    }
}

pub fn format_analyze_report(outcome: &AnalyzeOutcome) -> String {
    let report = &outcome.report;
    let mut output = String::new();

    let _ = writeln!(output, "Total links: {}", report.total);
    let _ = writeln!(output, "Unique usernames: {}", report.usernames.len());

    let _ = writeln!(output, "\nCategories:");
    for (category, count) in &report.categories {
        let _ = writeln!(output, "  {}: {}", category, count);
    }

    let _ = writeln!(output, "\nCountries:");
    for (country, count) in &report.countries {
        let _ = writeln!(output, "  {}: {}", country, count);
    }

    if !report.duplicate_usernames.is_empty() {
        let _ = writeln!(output, "\nDuplicate usernames:");
        for (name, texts) in &report.duplicate_usernames {
            let _ = writeln!(output, "  @{}: {}", name, texts.join(", "));
        }
    }

    if !report.minimal_tags.is_empty() {
        let _ = writeln!(output, "\nLinks with fewer than 5 tags: {}", report.minimal_tags.len());
        push_limited(&mut output, &report.minimal_tags, mention_line);
    }

    if !report.mixed_separators.is_empty() {
        let _ = writeln!(output, "\nUsernames mixing '_' and '-':");
        push_limited(&mut output, &report.mixed_separators, mention_line);
    }

    if !report.brand_matches.is_empty() {
        let _ = writeln!(output, "\nKnown brands (check website URLs):");
        push_limited(&mut output, &report.brand_matches, mention_line);
    }

    if let Some(path) = &outcome.usernames_written {
        let _ = writeln!(
            output,
            "\nSaved {} usernames to {}",
            report.usernames.len(),
            path.display()
        );
    }

    output
}
