//! Top-level tokenbridge configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, MatchingConfig, ScanConfig, StyleObjectForm, TransformConfig};
use crate::constants::COMPONENT_PLACEHOLDER;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TOKENBRIDGE_*`)
/// 3. Project config (`tokenbridge.toml` in project root)
/// 4. User config (`~/.tokenbridge/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    pub catalog: CatalogConfig,
    pub scan: ScanConfig,
    pub matching: MatchingConfig,
    pub transform: TransformConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub catalog_path: Option<String>,
    pub component_pattern: Option<String>,
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
    pub min_confidence: Option<f64>,
    pub style_object_form: Option<StyleObjectForm>,
}

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "tokenbridge.toml";

impl BridgeConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BridgeConfig) -> Result<(), ConfigError> {
        let unit_fields = [
            ("matching.radius_min_confidence", config.matching.radius_min_confidence),
            ("matching.shadow_min_similarity", config.matching.shadow_min_similarity),
            ("matching.typography_min_score", config.matching.typography_min_score),
            (
                "matching.class_name_min_similarity",
                config.matching.class_name_min_similarity,
            ),
            ("transform.min_confidence", config.transform.min_confidence),
            ("transform.color_min_confidence", config.transform.color_min_confidence),
            ("transform.radius_min_confidence", config.transform.radius_min_confidence),
            ("transform.shadow_min_confidence", config.transform.shadow_min_confidence),
            (
                "transform.typography_min_confidence",
                config.transform.typography_min_confidence,
            ),
        ];
        for (field, value) in unit_fields {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if let Some(d) = config.matching.color_max_distance {
            if !(d > 0.0 && d <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.color_max_distance".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if let Some(px) = config.matching.radius_min_allowance_px {
            if px <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.radius_min_allowance_px".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref pattern) = config.scan.component_pattern {
            if !pattern.contains(COMPONENT_PLACEHOLDER) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.component_pattern".to_string(),
                    message: format!("must contain {COMPONENT_PLACEHOLDER}"),
                });
            }
        }
        config.scan.ignore_patterns()?;
        for alias in &config.matching.aliases {
            if alias.alternate.trim().is_empty() || alias.canonical.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "matching.aliases".to_string(),
                    message: "alternate and canonical must be non-empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tokenbridge/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BridgeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BridgeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    pub fn merge(base: &mut BridgeConfig, other: &BridgeConfig) {
        // Catalog
        if other.catalog.path.is_some() {
            base.catalog.path = other.catalog.path.clone();
        }

        // Scan
        if other.scan.component_pattern.is_some() {
            base.scan.component_pattern = other.scan.component_pattern.clone();
        }
        if !other.scan.source_extensions.is_empty() {
            base.scan.source_extensions = other.scan.source_extensions.clone();
        }
        if !other.scan.presentational_extensions.is_empty() {
            base.scan.presentational_extensions = other.scan.presentational_extensions.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        // Matching
        let (m, om) = (&mut base.matching, &other.matching);
        if om.color_max_distance.is_some() {
            m.color_max_distance = om.color_max_distance;
        }
        if om.radius_min_allowance_px.is_some() {
            m.radius_min_allowance_px = om.radius_min_allowance_px;
        }
        if om.radius_relative_allowance.is_some() {
            m.radius_relative_allowance = om.radius_relative_allowance;
        }
        if om.radius_min_confidence.is_some() {
            m.radius_min_confidence = om.radius_min_confidence;
        }
        if om.shadow_min_similarity.is_some() {
            m.shadow_min_similarity = om.shadow_min_similarity;
        }
        if om.typography_min_score.is_some() {
            m.typography_min_score = om.typography_min_score;
        }
        if om.class_name_min_similarity.is_some() {
            m.class_name_min_similarity = om.class_name_min_similarity;
        }
        // Aliases accumulate across layers; later layers win on lookup.
        m.aliases.extend(om.aliases.iter().cloned());

        // Transform
        let (t, ot) = (&mut base.transform, &other.transform);
        if ot.min_confidence.is_some() {
            t.min_confidence = ot.min_confidence;
        }
        if ot.color_min_confidence.is_some() {
            t.color_min_confidence = ot.color_min_confidence;
        }
        if ot.radius_min_confidence.is_some() {
            t.radius_min_confidence = ot.radius_min_confidence;
        }
        if ot.shadow_min_confidence.is_some() {
            t.shadow_min_confidence = ot.shadow_min_confidence;
        }
        if ot.typography_min_confidence.is_some() {
            t.typography_min_confidence = ot.typography_min_confidence;
        }
        if ot.style_object_form.is_some() {
            t.style_object_form = ot.style_object_form;
        }
        if ot.accessor_module.is_some() {
            t.accessor_module = ot.accessor_module.clone();
        }
        if ot.insert_accessor_imports.is_some() {
            t.insert_accessor_imports = ot.insert_accessor_imports;
        }
        if ot.rewrite_token_imports.is_some() {
            t.rewrite_token_imports = ot.rewrite_token_imports;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TOKENBRIDGE_SCAN_MAX_FILE_SIZE`, `TOKENBRIDGE_MATCH_COLOR_MAX_DISTANCE`, etc.
    fn apply_env_overrides(config: &mut BridgeConfig) {
        if let Ok(val) = std::env::var("TOKENBRIDGE_CATALOG_PATH") {
            config.catalog.path = Some(val);
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_SCAN_COMPONENT_PATTERN") {
            config.scan.component_pattern = Some(val);
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_MATCH_COLOR_MAX_DISTANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.matching.color_max_distance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_MATCH_SHADOW_MIN_SIMILARITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.matching.shadow_min_similarity = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_TRANSFORM_MIN_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.transform.min_confidence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOKENBRIDGE_TRANSFORM_STYLE_OBJECT_FORM") {
            if let Ok(v) = val.parse::<StyleObjectForm>() {
                config.transform.style_object_form = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BridgeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.catalog_path {
            config.catalog.path = Some(v.clone());
        }
        if let Some(ref v) = cli.component_pattern {
            config.scan.component_pattern = Some(v.clone());
        }
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
        if let Some(v) = cli.min_confidence {
            config.transform.min_confidence = Some(v);
        }
        if let Some(v) = cli.style_object_form {
            config.transform.style_object_form = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.tokenbridge/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".tokenbridge"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
