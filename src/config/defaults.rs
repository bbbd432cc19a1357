//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

use std::path::PathBuf;

pub fn root() -> PathBuf {
    "./".into()
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [catalog] Section Defaults
// ============================================================================

pub mod catalog {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "content/catalog.toml".into()
    }
}

// ============================================================================
// [recommend] Section Defaults
// ============================================================================

pub mod recommend {
    pub fn limit() -> usize {
        3
    }
}
