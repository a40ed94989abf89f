//! `[validate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! level = "error"        # Failure level: error | warn
//! duplicates = "allow"   # Repeated targets: allow | group | index
//! nav = true             # Also check top navigation bar links
//! ```

use serde::{Deserialize, Serialize};

use crate::index::DuplicatePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// How to treat validation failures.
    pub level: ValidateLevel,

    /// How repeated link targets are treated.
    pub duplicates: DuplicatePolicy,

    /// Check top navigation bar links too.
    pub nav: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            level: ValidateLevel::default(),
            duplicates: DuplicatePolicy::default(),
            nav: true,
        }
    }
}

/// Validation failure level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Report and exit with a failure status.
    #[default]
    Error,
    /// Report only.
    Warn,
}

impl ValidateLevel {
    #[inline]
    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}
