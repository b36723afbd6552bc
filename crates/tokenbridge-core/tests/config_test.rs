//! Tests for the tokenbridge configuration system.

use std::sync::Mutex;

use tokenbridge_core::config::{BridgeConfig, CliOverrides, StyleObjectForm};
use tokenbridge_core::errors::ConfigError;
use tokenbridge_core::TokenCategory;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TOKENBRIDGE_ env vars to prevent cross-test contamination.
fn clear_bridge_env_vars() {
    for key in [
        "TOKENBRIDGE_CATALOG_PATH",
        "TOKENBRIDGE_SCAN_COMPONENT_PATTERN",
        "TOKENBRIDGE_SCAN_MAX_FILE_SIZE",
        "TOKENBRIDGE_SCAN_THREADS",
        "TOKENBRIDGE_MATCH_COLOR_MAX_DISTANCE",
        "TOKENBRIDGE_MATCH_SHADOW_MIN_SIMILARITY",
        "TOKENBRIDGE_TRANSFORM_MIN_CONFIDENCE",
        "TOKENBRIDGE_TRANSFORM_STYLE_OBJECT_FORM",
    ] {
        std::env::remove_var(key);
    }
}

/// Point HOME at an empty directory so a developer's user config cannot leak in.
fn isolate_home(dir: &tempfile::TempDir) {
    std::env::set_var("HOME", dir.path());
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bridge_env_vars();

    let home = tempdir();
    isolate_home(&home);
    let user_dir = home.path().join(".tokenbridge");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[scan]
threads = 2
max_file_size = 1000

[transform]
accessor_module = "@acme/tokens"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tokenbridge.toml"),
        r#"
[scan]
max_file_size = 2_000_000

[matching]
color_max_distance = 0.05
"#,
    )
    .unwrap();

    std::env::set_var("TOKENBRIDGE_MATCH_COLOR_MAX_DISTANCE", "0.08");

    let cli = CliOverrides {
        style_object_form: Some(StyleObjectForm::CssVariable),
        scan_threads: Some(8),
        ..Default::default()
    };

    let config = BridgeConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats user config
    assert_eq!(config.scan.threads, Some(8));
    // Project beats user
    assert_eq!(config.scan.max_file_size, Some(2_000_000));
    // Env beats project
    assert_eq!(config.matching.color_max_distance, Some(0.08));
    // User survives where nothing overrides it
    assert_eq!(config.transform.effective_accessor_module(), "@acme/tokens");
    assert_eq!(
        config.transform.effective_style_object_form(),
        StyleObjectForm::CssVariable
    );

    clear_bridge_env_vars();
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bridge_env_vars();

    let home = tempdir();
    isolate_home(&home);
    let dir = tempdir();
    let config = BridgeConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scan.effective_max_file_size(), 1_048_576);
    assert_eq!(
        config.scan.effective_component_pattern(),
        "src/components/{componentName}"
    );
    assert_eq!(config.scan.effective_presentational_extensions(), vec!["tsx", "jsx"]);
    assert_eq!(config.transform.effective_accessor_module(), "@tokens/token-index");
    assert_eq!(config.transform.cutoff(TokenCategory::Color), 0.0);
    let thresholds = config.matching.thresholds();
    assert_eq!(thresholds.color_max_distance, 0.1);
    assert_eq!(thresholds.radius_min_confidence, 0.7);
    assert_eq!(thresholds.typography_min_score, 0.5);
}

#[test]
fn test_env_var_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bridge_env_vars();

    let home = tempdir();
    isolate_home(&home);
    let dir = tempdir();
    std::env::set_var("TOKENBRIDGE_SCAN_MAX_FILE_SIZE", "5242880");
    std::env::set_var("TOKENBRIDGE_TRANSFORM_STYLE_OBJECT_FORM", "css-variable");

    let config = BridgeConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.scan.max_file_size, Some(5_242_880));
    assert_eq!(config.transform.style_object_form, Some(StyleObjectForm::CssVariable));

    clear_bridge_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_bridge_env_vars();

    let home = tempdir();
    isolate_home(&home);
    let dir = tempdir();
    std::fs::write(dir.path().join("tokenbridge.toml"), "this is not valid toml {{{{").unwrap();

    match BridgeConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_out_of_range_threshold_fails_validation() {
    let config = BridgeConfig::from_toml(
        r#"
[matching]
shadow_min_similarity = 1.5
"#,
    )
    .unwrap();

    match BridgeConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "matching.shadow_min_similarity");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_component_pattern_requires_placeholder() {
    let config = BridgeConfig::from_toml(
        r#"
[scan]
component_pattern = "src/components"
"#,
    )
    .unwrap();

    assert!(matches!(
        BridgeConfig::validate(&config),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "scan.component_pattern"
    ));
}

#[test]
fn test_bad_ignore_glob_is_rejected() {
    let config = BridgeConfig::from_toml(
        r#"
[scan]
extra_ignore = ["**/[unclosed"]
"#,
    )
    .unwrap();

    assert!(matches!(
        BridgeConfig::validate(&config),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_alias_entries_accumulate_across_layers() {
    let mut base = BridgeConfig::from_toml(
        r#"
[[matching.aliases]]
category = "color"
alternate = "--brand"
canonical = "olivia-blue"
"#,
    )
    .unwrap();
    let project = BridgeConfig::from_toml(
        r#"
[[matching.aliases]]
category = "shadow"
alternate = "--card-shadow"
canonical = "shadow-tooltip"
"#,
    )
    .unwrap();

    BridgeConfig::merge(&mut base, &project);

    assert_eq!(base.matching.aliases.len(), 2);
    assert_eq!(base.matching.aliases[1].category, TokenCategory::Shadow);
}

#[test]
fn test_per_category_cutoff_overrides_global() {
    let config = BridgeConfig::from_toml(
        r#"
[transform]
min_confidence = 0.6
shadow_min_confidence = 0.9
"#,
    )
    .unwrap();

    assert_eq!(config.transform.cutoff(TokenCategory::Shadow), 0.9);
    assert_eq!(config.transform.cutoff(TokenCategory::BorderRadius), 0.6);
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = BridgeConfig::from_toml(
        r#"
[catalog]
path = "tokens.json"

[scan]
presentational_extensions = [".TSX"]
"#,
    )
    .unwrap();

    let text = config.to_toml().unwrap();
    let back = BridgeConfig::from_toml(&text).unwrap();
    assert_eq!(back.catalog.path.as_deref(), Some("tokens.json"));
    assert_eq!(back.scan.effective_presentational_extensions(), vec!["tsx"]);
}
