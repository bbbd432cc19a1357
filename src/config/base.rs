//! `[base]` section configuration.
//!
//! Holds the public site URL used to build absolute record links.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://janedoe.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Base URL for absolute record links (`<url>/<kind>/<slug>/`).
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}

impl BaseConfig {
    /// Absolute URL of a record page, when `url` is configured.
    pub fn item_url(&self, kind: &str, slug: &str) -> Option<String> {
        self.url
            .as_deref()
            .map(|base| format!("{}/{kind}/{slug}/", base.trim_end_matches('/')))
    }
}
