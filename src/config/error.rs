//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating `folio.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("catalog file `{0}` not found, set [catalog].path or pass --catalog")]
    CatalogNotFound(PathBuf),

    #[error("Config validation error: {0}")]
    Validation(String),
}
