//! Configuration system for tokenbridge.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod bridge_config;
pub mod catalog_config;
pub mod matching_config;
pub mod scan_config;
pub mod transform_config;

pub use bridge_config::{BridgeConfig, CliOverrides};
pub use catalog_config::CatalogConfig;
pub use matching_config::{AliasEntry, MatchThresholds, MatchingConfig};
pub use scan_config::ScanConfig;
pub use transform_config::{StyleObjectForm, TransformConfig};
