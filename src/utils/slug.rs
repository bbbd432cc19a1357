//! Slug checks for catalog identifiers.
//!
//! Slugs end up in page URLs (`/projects/<slug>/`), so the checker
//! nudges authors toward lowercase kebab-case and can suggest one.

use deunicode::deunicode;

/// Returns true for lowercase kebab-case: `a-z`, `0-9`, single dashes,
/// no leading or trailing dash.
pub fn is_kebab_case(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Build a kebab-case slug from arbitrary text (usually a title).
///
/// Non-ASCII letters are transliterated first (`"Café"` → `"cafe"`), then
/// runs of anything that is not ASCII alphanumeric collapse into a single
/// dash. Returns an empty string when nothing usable remains.
pub fn suggest(text: &str) -> String {
    let ascii = deunicode(text.trim());
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
