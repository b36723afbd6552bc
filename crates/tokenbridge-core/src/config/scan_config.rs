//! Component source configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMPONENT_PATTERN, DEFAULT_MAX_FILE_SIZE};
use crate::errors::ConfigError;

/// Configuration for locating and reading component files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Component directory pattern, relative to the repository root.
    /// Must contain `{componentName}`. Default: `src/components/{componentName}`.
    pub component_pattern: Option<String>,
    /// Extensions returned by the local source. Default: ts, tsx, js, jsx.
    #[serde(default)]
    pub source_extensions: Vec<String>,
    /// Extensions eligible for analysis and rewriting. Default: tsx, jsx.
    #[serde(default)]
    pub presentational_extensions: Vec<String>,
    /// Maximum file size in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Number of worker threads. 0 or unset = rayon's default.
    pub threads: Option<usize>,
    /// Additional glob patterns (relative to the component directory) to skip.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective component pattern.
    pub fn effective_component_pattern(&self) -> &str {
        self.component_pattern
            .as_deref()
            .unwrap_or(DEFAULT_COMPONENT_PATTERN)
    }

    /// Returns the effective source extensions, lowercased, without dots.
    pub fn effective_source_extensions(&self) -> Vec<String> {
        normalize_extensions(&self.source_extensions, &["ts", "tsx", "js", "jsx"])
    }

    /// Returns the effective presentational extensions, lowercased, without dots.
    pub fn effective_presentational_extensions(&self) -> Vec<String> {
        normalize_extensions(&self.presentational_extensions, &["tsx", "jsx"])
    }

    /// Returns the effective max file size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns the effective thread count, 0 meaning rayon's default.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    /// Compile `extra_ignore` into glob patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.extra_ignore
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| ConfigError::InvalidValue {
                    field: "scan.extra_ignore".to_string(),
                    message: format!("{p}: {e}"),
                })
            })
            .collect()
    }
}

fn normalize_extensions(configured: &[String], defaults: &[&str]) -> Vec<String> {
    if configured.is_empty() {
        return defaults.iter().map(|s| s.to_string()).collect();
    }
    configured
        .iter()
        .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
        .collect()
}
