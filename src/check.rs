//! Catalog checks run by `folio check`.
//!
//! Nothing here changes how the ranker behaves: invalid records are still
//! filtered out silently at ranking time. The checker only tells the author
//! which records will be dropped or rendered oddly.

use crate::{
    catalog::{Catalog, ContentItem, ContentKind},
    metric,
    utils::{date::DateTimeUtc, date::parse_timeline, slug},
};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding about one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: ContentKind,
    /// Position within its `[[kind]]` array in the catalog file.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every record of the catalog.
pub fn check_catalog(catalog: &Catalog) -> Report {
    let mut report = Report::default();

    for skip in &catalog.skipped {
        report.issues.push(Issue {
            kind: skip.kind,
            index: skip.index,
            slug: None,
            severity: Severity::Error,
            message: format!("record could not be decoded: {}", skip.reason),
        });
    }

    for kind in ContentKind::ALL {
        let mut seen = HashSet::new();
        for item in catalog.items(kind) {
            let mut push = |severity: Severity, message: String| {
                report.issues.push(Issue {
                    kind,
                    index: item.index,
                    slug: item.slug().map(str::to_owned),
                    severity,
                    message,
                });
            };

            check_identity(item, &mut push);

            if let Some(s) = item.slug()
                && !seen.insert(s)
            {
                push(Severity::Error, format!("duplicate slug `{s}`"));
            }

            check_dates(item, &mut push);
            check_metrics(item, &mut push);
        }
    }

    report
}

fn check_identity(item: &ContentItem, push: &mut impl FnMut(Severity, String)) {
    match (item.slug(), item.title()) {
        (None, _) => push(
            Severity::Warning,
            "missing slug, record will never be recommended".into(),
        ),
        (Some(_), None) => push(
            Severity::Warning,
            "missing title, record will never be recommended".into(),
        ),
        (Some(s), Some(_)) if !slug::is_kebab_case(s) => {
            let hint = slug::suggest(s);
            let message = if hint.is_empty() {
                format!("slug `{s}` is not lowercase kebab-case")
            } else {
                format!("slug `{s}` is not lowercase kebab-case, try `{hint}`")
            };
            push(Severity::Warning, message);
        }
        _ => {}
    }
}

fn check_dates(item: &ContentItem, push: &mut impl FnMut(Severity, String)) {
    for published in item.published_values() {
        if DateTimeUtc::parse(published).is_none() {
            push(
                Severity::Warning,
                format!("published date `{published}` is not YYYY-MM-DD"),
            );
        }
    }

    if let Some(timeline) = item.timeline.as_deref()
        && parse_timeline(timeline).is_none()
    {
        push(
            Severity::Warning,
            format!("timeline `{timeline}` has no recognizable year"),
        );
    }
}

fn check_metrics(item: &ContentItem, push: &mut impl FnMut(Severity, String)) {
    for entry in &item.metrics {
        if !metric::parse(&entry.value).has_number() {
            push(
                Severity::Warning,
                format!(
                    "metric `{}` value `{}` has no number, counter will show 0",
                    entry.label, entry.value
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(src: &str) -> Report {
        check_catalog(&Catalog::from_str(src).unwrap())
    }

    fn messages(report: &Report) -> Vec<&str> {
        report.issues.iter().map(|i| i.message.as_str()).collect()
    }

    #[test]
    fn test_clean_catalog() {
        let report = report(
            r#"
            [[projects]]
            slug = "payments"
            name = "Payments"
            timeline = "2022 – 2024"
            [[projects.metrics]]
            label = "Volume"
            value = "$184.4M"

            [[articles]]
            slug = "tokens"
            title = "Tokens"
            published = "2024-05-02"
            "#,
        );
        assert!(report.is_clean(), "{:?}", report.issues);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_missing_identity() {
        let report = report(
            r#"
            [[projects]]
            name = "No Slug"

            [[projects]]
            slug = "no-title"
            "#,
        );
        assert_eq!(report.count(Severity::Warning), 2);
        assert!(messages(&report)[0].contains("missing slug"));
        assert!(messages(&report)[1].contains("missing title"));
        assert_eq!(report.issues[1].slug.as_deref(), Some("no-title"));
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let report = report(
            r#"
            [[articles]]
            slug = "same"
            title = "One"

            [[articles]]
            slug = "same"
            title = "Two"
            "#,
        );
        assert!(report.has_errors());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].index, 1);
    }

    #[test]
    fn test_same_slug_across_kinds_is_fine() {
        let report = report(
            r#"
            [[projects]]
            slug = "same"
            name = "Project"

            [[articles]]
            slug = "same"
            title = "Article"
            "#,
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_non_kebab_slug() {
        let report = report(
            r#"
            [[projects]]
            slug = "My_Project"
            name = "Mine"
            "#,
        );
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(messages(&report)[0].contains("try `my-project`"));
    }

    #[test]
    fn test_bad_dates() {
        let report = report(
            r#"
            [[articles]]
            slug = "a"
            title = "A"
            published = "May 2nd"

            [[projects]]
            slug = "p"
            name = "P"
            timeline = "a few months"
            "#,
        );
        assert_eq!(report.count(Severity::Warning), 2);
    }

    #[test]
    fn test_metric_without_number() {
        let report = report(
            r#"
            [[projects]]
            slug = "p"
            name = "P"
            [[projects.metrics]]
            label = "Uptime"
            value = "N/A"
            "#,
        );
        assert_eq!(report.issues.len(), 1);
        assert!(messages(&report)[0].contains("Uptime"));
    }

    #[test]
    fn test_skipped_records_are_errors() {
        let report = report(
            r#"
            [[articles]]
            slug = "bad"
            title = "Bad"
            featured = "yes"
            "#,
        );
        assert!(report.has_errors());
        assert!(messages(&report)[0].contains("could not be decoded"));
    }

    #[test]
    fn test_indices_count_skipped_records() {
        let report = report(
            r#"
            [[articles]]
            slug = "good"
            title = "Good"

            [[articles]]
            slug = "bad"
            title = "Bad"
            views = "x"

            [[articles]]
            slug = "good"
            title = "Good Again"
            "#,
        );

        let decode = report
            .issues
            .iter()
            .find(|i| i.message.contains("could not be decoded"))
            .unwrap();
        let duplicate = report
            .issues
            .iter()
            .find(|i| i.message.contains("duplicate slug"))
            .unwrap();
        assert_eq!(decode.index, 1);
        assert_eq!(duplicate.index, 2);
    }

    #[test]
    fn test_both_published_spellings_checked() {
        let report = report(
            r#"
            [[articles]]
            slug = "a"
            title = "A"
            published = "2024-05-02"
            publishedDate = "soon"
            "#,
        );
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(messages(&report)[0].contains("`soon`"));
    }
}
