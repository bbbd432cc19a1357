//! The content catalog: projects and articles loaded from a TOML file.
//!
//! The catalog is loaded once at startup and handed to the ranker and the
//! checker by reference. Nothing mutates it after [`Catalog::from_path`].
//!
//! # File Layout
//!
//! ```toml
//! [[projects]]
//! slug = "payments-platform"
//! name = "Payments Platform"
//! featured = true
//! timeline = "2022 – 2024"
//!
//! [[articles]]
//! slug = "on-design-tokens"
//! title = "On Design Tokens"
//! views = 1200
//! published = "2024-05-02"
//! ```
//!
//! Each record is deserialized on its own. A record with a wrong-typed
//! field is skipped and recorded in [`Catalog::skipped`] instead of failing
//! the whole file.

mod types;

pub use types::{ContentItem, ContentKind, RankKey};

use crate::log;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Catalog file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// A record dropped at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub kind: ContentKind,
    /// Position within its `[[kind]]` array.
    pub index: usize,
    pub reason: String,
}

/// Top-level shape of the catalog file, before per-record decoding.
#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    projects: Vec<toml::Value>,
    #[serde(default)]
    articles: Vec<toml::Value>,
}

/// Read-only collection of content records, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ContentItem>,
    articles: Vec<ContentItem>,
    /// Records that could not be decoded.
    pub skipped: Vec<SkippedRecord>,
}

impl Catalog {
    /// Parse a catalog from TOML text
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;
        let mut skipped = Vec::new();

        let projects = decode_records(ContentKind::Projects, raw.projects, &mut skipped);
        let articles = decode_records(ContentKind::Articles, raw.articles, &mut skipped);

        Ok(Self {
            projects,
            articles,
            skipped,
        })
    }

    /// Load a catalog file, logging every skipped record.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content =
            fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
        let catalog = Self::from_str(&content)?;

        for skip in &catalog.skipped {
            log!("warn"; "skipping {}[{}]: {}", skip.kind, skip.index, skip.reason);
        }
        log!(
            "catalog";
            "loaded {} projects, {} articles",
            catalog.projects.len(),
            catalog.articles.len()
        );

        Ok(catalog)
    }

    /// Records of one kind, in file order.
    pub fn items(&self, kind: ContentKind) -> &[ContentItem] {
        match kind {
            ContentKind::Projects => &self.projects,
            ContentKind::Articles => &self.articles,
        }
    }

    /// Find a record by exact (trimmed) slug.
    pub fn find(&self, kind: ContentKind, slug: &str) -> Option<&ContentItem> {
        let slug = slug.trim();
        self.items(kind).iter().find(|item| item.slug() == Some(slug))
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.articles.is_empty()
    }
}

fn decode_records(
    kind: ContentKind,
    values: Vec<toml::Value>,
    skipped: &mut Vec<SkippedRecord>,
) -> Vec<ContentItem> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match value.try_into::<ContentItem>() {
            Ok(item) => Some(ContentItem { index, ..item }),
            Err(err) => {
                skipped.push(SkippedRecord {
                    kind,
                    index,
                    reason: err.message().to_owned(),
                });
                None
            }
        })
        .collect()
}
