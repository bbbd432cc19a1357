//! Plain-data output for the command layer.
//!
//! Ranked records and parsed metrics are printed either as one line per
//! entry or as JSON. Nothing here produces markup; rendering cards and
//! counters is left to the site templates that consume this data.

use crate::{
    catalog::{ContentItem, ContentKind},
    config::SiteConfig,
    metric::MetricValue,
};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// A ranked record as handed to the presentation layer.
#[derive(Debug, Serialize)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub slug: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub featured: bool,
    pub views: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub tags: &'a [String],
}

impl<'a> RankedEntry<'a> {
    /// Build entries from ranker output. Records are valid by construction.
    pub fn from_ranked(
        ranked: &[&'a ContentItem],
        kind: ContentKind,
        config: &SiteConfig,
    ) -> Vec<Self> {
        ranked
            .iter()
            .enumerate()
            .filter_map(|(i, &item)| {
                let slug = item.slug()?;
                let key = item.rank_key();
                Some(Self {
                    rank: i + 1,
                    slug,
                    title: item.title()?,
                    description: item.description.as_deref(),
                    featured: key.featured,
                    views: key.views,
                    date: key.date.map(|d| d.ymd()),
                    url: config.base.item_url(kind.name(), slug),
                    tags: &item.tags,
                })
            })
            .collect()
    }

    fn line(&self) -> String {
        let mut line = format!("{:>2}. {} | {}", self.rank, self.slug, self.title);
        if self.featured {
            line.push_str(" | featured");
        }
        line.push_str(&format!(" | {} views", self.views));
        if let Some(date) = &self.date {
            line.push_str(&format!(" | {date}"));
        }
        line
    }
}

/// A parsed metric, optionally with its label and counter frames.
#[derive(Debug, Serialize)]
pub struct ParsedMetric<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub input: &'a str,
    #[serde(flatten)]
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<String>,
}

impl ParsedMetric<'_> {
    fn line(&self) -> String {
        let name = self.label.map(|l| format!("{l}: ")).unwrap_or_default();
        let mut line = format!(
            "{name}{:?} -> prefix {:?}, number {}, suffix {:?}",
            self.input, self.value.prefix, self.value.number, self.value.suffix
        );
        if !self.frames.is_empty() {
            line.push_str(&format!(" [{}]", self.frames.join(", ")));
        }
        line
    }
}

/// Print ranked entries. An empty ranking prints nothing in text mode so
/// callers can suppress the section; JSON mode prints `[]`.
pub fn print_ranked(out: &mut impl Write, entries: &[RankedEntry], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
    } else {
        for entry in entries {
            writeln!(out, "{}", entry.line())?;
        }
    }
    Ok(())
}

pub fn print_metrics(out: &mut impl Write, entries: &[ParsedMetric], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
    } else {
        for entry in entries {
            writeln!(out, "{}", entry.line())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metric, rank};

    fn items() -> Vec<ContentItem> {
        toml::from_str::<toml::Table>(
            r#"
            [[items]]
            slug = "payments"
            name = "Payments Platform"
            featured = true
            views = 5000
            timeline = "2022 – 2024"
            tags = ["fintech"]

            [[items]]
            slug = "health"
            name = "Health Tracker"
            "#,
        )
        .unwrap()
        .remove("items")
        .unwrap()
        .try_into()
        .unwrap()
    }

    fn config() -> SiteConfig {
        SiteConfig::from_str("[base]\nurl = \"https://janedoe.dev\"").unwrap()
    }

    #[test]
    fn test_ranked_entries() {
        let items = items();
        let ranked = rank::recommend(&items, None, 3);
        let entries = RankedEntry::from_ranked(&ranked, ContentKind::Projects, &config());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].slug, "payments");
        assert_eq!(entries[0].date.as_deref(), Some("2024-01-01"));
        assert_eq!(
            entries[0].url.as_deref(),
            Some("https://janedoe.dev/projects/payments/")
        );
        assert_eq!(entries[1].views, 0);
    }

    #[test]
    fn test_print_ranked_text() {
        let items = items();
        let ranked = rank::recommend(&items, Some("health"), 3);
        let entries = RankedEntry::from_ranked(&ranked, ContentKind::Projects, &config());

        let mut out = Vec::new();
        print_ranked(&mut out, &entries, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            " 1. payments | Payments Platform | featured | 5000 views | 2024-01-01\n"
        );
    }

    #[test]
    fn test_print_ranked_empty() {
        let mut out = Vec::new();
        print_ranked(&mut out, &[], false).unwrap();
        assert!(out.is_empty());

        let mut out = Vec::new();
        print_ranked(&mut out, &[], true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn test_print_ranked_json() {
        let items = items();
        let ranked = rank::recommend(&items, None, 1);
        let entries = RankedEntry::from_ranked(&ranked, ContentKind::Projects, &config());

        let mut out = Vec::new();
        print_ranked(&mut out, &entries, true).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json[0]["slug"], "payments");
        assert_eq!(json[0]["featured"], true);
        assert_eq!(json[0]["tags"][0], "fintech");
    }

    #[test]
    fn test_print_metrics() {
        let entries = vec![ParsedMetric {
            label: Some("Volume"),
            input: "$184.4M",
            value: metric::parse("$184.4M"),
            frames: Vec::new(),
        }];

        let mut out = Vec::new();
        print_metrics(&mut out, &entries, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Volume: \"$184.4M\" -> prefix \"$\", number 184.4, suffix \"M\"\n"
        );

        let mut out = Vec::new();
        print_metrics(&mut out, &entries, true).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["prefix"], "$");
        assert_eq!(json[0]["number"], 184.4);
        assert_eq!(json[0]["suffix"], "M");
        assert!(json[0].get("matched").is_none());
    }
}
