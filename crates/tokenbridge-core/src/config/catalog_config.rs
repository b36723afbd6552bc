//! Catalog source configuration.

use serde::{Deserialize, Serialize};

/// Where the token catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a JSON or TOML catalog definition. Default: the built-in catalog.
    pub path: Option<String>,
}
