//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                    |
//! |---------------|--------------------------------------------|
//! | `[base]`      | Public site URL for record links           |
//! | `[catalog]`   | Where the project/article records live     |
//! | `[recommend]` | Recommendation section defaults            |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://janedoe.dev"
//!
//! [catalog]
//! path = "content/catalog.toml"
//!
//! [recommend]
//! limit = 3
//! ```

mod base;
pub mod defaults;
mod error;

use base::BaseConfig;
pub use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Sections
// ============================================================================

/// `[catalog]` section - location of the content records.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog TOML file, relative to the project root.
    #[serde(default = "defaults::catalog::path")]
    #[educe(Default = defaults::catalog::path())]
    pub path: PathBuf,
}

/// `[recommend]` section - defaults for `folio recommend`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RecommendConfig {
    /// Records shown in a recommendation section.
    #[serde(default = "defaults::recommend::limit")]
    #[educe(Default = defaults::recommend::limit())]
    pub limit: usize,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root (set after loading)
    #[serde(skip, default = "defaults::root")]
    #[educe(Default = defaults::root())]
    pub root: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub recommend: RecommendConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `folio.toml` under the CLI root, falling back to defaults when
    /// the file does not exist, then apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| self.root.clone());
        Self::update_option(&mut self.catalog.path, cli.catalog.as_ref());

        self.root = Self::normalize_path(&root);
        self.catalog.path = Self::normalize_path(&self.root.join(&self.catalog.path));
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if cli.needs_catalog() {
            if !self.catalog.path.exists() {
                bail!(ConfigError::CatalogNotFound(self.catalog.path.clone()));
            }
            if !self.catalog.path.is_file() {
                bail!(ConfigError::Validation(
                    "[catalog.path] is not a file".into()
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
