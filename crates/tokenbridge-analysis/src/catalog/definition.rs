//! Serializable catalog definitions (JSON or TOML files).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokenbridge_core::errors::CatalogError;

use super::types::{BorderRadiusToken, ColorToken, ShadowToken, TypographyToken};

/// The on-disk shape of a catalog, before validation and indexing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDefinition {
    pub colors: Vec<ColorToken>,
    #[serde(alias = "borderRadius", alias = "radii")]
    pub border_radius: Vec<BorderRadiusToken>,
    pub shadows: Vec<ShadowToken>,
    pub typography: Vec<TypographyToken>,
}

impl CatalogDefinition {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(text).map_err(|e| CatalogError::Load {
            path: "<json>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        toml::from_str(text).map_err(|e| CatalogError::Load {
            path: "<toml>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a definition file; `.toml` is parsed as TOML, anything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::from_toml(&text)
        } else {
            Self::from_json(&text)
        };
        parsed.map_err(|e| match e {
            CatalogError::Load { message, .. } => CatalogError::Load {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }
}
