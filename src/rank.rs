//! Recommendation ranking for "more case studies" / "keep reading" sections.
//!
//! # Ordering
//!
//! | Priority | Key       | Direction          | Missing value      |
//! |----------|-----------|--------------------|--------------------|
//! | 1        | featured  | featured first     | not featured       |
//! | 2        | views     | higher first       | 0                  |
//! | 3        | date      | newer first        | after every date   |
//!
//! Records equal on all three keys keep their catalog order, so the result
//! is fully determined by the input sequence and the exclusion slug.
//!
//! An empty result means the caller should not render the section at all.

use crate::catalog::{ContentItem, RankKey};
use std::cmp::Ordering;

/// Rank `items` for display, leaving out `exclude` and invalid records.
///
/// Returns at most `limit` records, highest priority first.
///
/// # Example
///
/// ```ignore
/// let items = catalog.items(ContentKind::Projects);
/// let more = recommend(items, Some("payments"), 3);
/// ```
pub fn recommend<'a, I>(items: I, exclude: Option<&str>, limit: usize) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    if limit == 0 {
        return Vec::new();
    }

    let exclude = exclude.map(str::trim);
    let mut ranked: Vec<(RankKey, &ContentItem)> = items
        .into_iter()
        .filter(|item| item.is_valid())
        .filter(|item| exclude.is_none() || item.slug() != exclude)
        .map(|item| (item.rank_key(), item))
        .collect();

    // `sort_by` is stable: ties keep input order.
    ranked.sort_by(|(a, _), (b, _)| compare(a, b));
    ranked.truncate(limit);

    ranked.into_iter().map(|(_, item)| item).collect()
}

/// Narrow a sequence to records carrying `tag` (case-insensitive).
pub fn with_tag<'a, I>(items: I, tag: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    items.into_iter().filter(|item| item.has_tag(tag)).collect()
}

/// Priority ordering: `Less` means `a` is shown before `b`.
pub fn compare(a: &RankKey, b: &RankKey) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| b.views.cmp(&a.views))
        // `None < Some(_)`, so reversing puts undated records last.
        .then_with(|| b.date.cmp(&a.date))
}
