//! Record types for the content catalog.
//!
//! Records are deserialized with every attribute optional so that a
//! half-filled entry still loads. Defaults are applied in one place,
//! [`ContentItem::rank_key`], rather than inside comparison code.

use crate::utils::date::{self, DateTimeUtc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which collection of the catalog a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Case studies, `[[projects]]` in the catalog file.
    Projects,
    /// Blog posts, `[[articles]]` in the catalog file.
    Articles,
}

impl ContentKind {
    pub const ALL: [Self; 2] = [Self::Projects, Self::Articles];

    /// Table name in the catalog file (also used as log prefix).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Articles => "articles",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labelled statistic attached to a record, e.g. `Revenue = "$184.4M"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub label: String,
    pub value: String,
}

/// A project or article record.
///
/// # Example
/// ```toml
/// [[projects]]
/// slug = "payments-platform"
/// name = "Payments Platform"
/// featured = true
/// views = 5200
/// timeline = "Jan 2023 – Present"
/// tags = ["fintech", "design-systems"]
///
/// [[projects.metrics]]
/// label = "Processed"
/// value = "$184.4M"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    /// Position within its `[[kind]]` array in the catalog file.
    #[serde(skip)]
    pub index: usize,

    /// Unique identifier, also the URL segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Project spelling of the title, used when `title` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Priority placement in recommendation listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Page view count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,

    /// Publication date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,

    /// Alternate spelling of `published`, consulted after it.
    #[serde(rename = "publishedDate", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    /// Free-text period such as `"2021 – 2023"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<MetricEntry>,
}

/// Ranking attributes of a record with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    pub featured: bool,
    pub views: u64,
    pub date: Option<DateTimeUtc>,
}

impl ContentItem {
    /// Trimmed slug, `None` when missing or blank.
    pub fn slug(&self) -> Option<&str> {
        non_blank(self.slug.as_deref())
    }

    /// Trimmed title, falling back to `name`. `None` when both are blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref()).or_else(|| non_blank(self.name.as_deref()))
    }

    /// Raw published values in lookup order.
    pub fn published_values(&self) -> impl Iterator<Item = &str> {
        [self.published.as_deref(), self.published_date.as_deref()]
            .into_iter()
            .flatten()
    }

    /// A record is rankable when it has both an identifier and a title.
    pub fn is_valid(&self) -> bool {
        self.slug().is_some() && self.title().is_some()
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
    }

    /// Resolved date: `published`, then `publishedDate`, then `timeline`.
    pub fn recency(&self) -> Option<DateTimeUtc> {
        let published = self
            .published_values()
            .find(|value| DateTimeUtc::parse(value).is_some());
        date::resolve(published, self.timeline.as_deref())
    }

    pub fn rank_key(&self) -> RankKey {
        RankKey {
            featured: self.featured.unwrap_or(false),
            views: self.views.unwrap_or(0),
            date: self.recency(),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
