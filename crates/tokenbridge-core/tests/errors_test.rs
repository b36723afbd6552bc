//! Tests for error codes and non-fatal error collection.

use std::path::PathBuf;

use tokenbridge_core::errors::error_code;
use tokenbridge_core::errors::{
    BatchResult, BridgeErrorCode, CatalogError, ConfigError, SourceError, TransformError,
};
use tokenbridge_core::TokenCategory;

#[test]
fn test_token_not_found_has_dedicated_code() {
    let err = CatalogError::TokenNotFound {
        category: TokenCategory::Color,
        input: "mauve".to_string(),
    };
    assert_eq!(err.error_code(), error_code::TOKEN_NOT_FOUND);
    assert_eq!(err.report_string(), "[TOKEN_NOT_FOUND] color token not found: mauve");
}

#[test]
fn test_transform_error_delegates_codes() {
    let from_source: TransformError = SourceError::ComponentDirMissing {
        path: PathBuf::from("src/components/Nope"),
    }
    .into();
    assert_eq!(from_source.error_code(), error_code::COMPONENT_NOT_FOUND);

    let from_config: TransformError = ConfigError::InvalidValue {
        field: "scan.threads".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert_eq!(from_config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_batch_result_collects_errors() {
    let mut result: BatchResult<Vec<u32>> = BatchResult::new(vec![1, 2]);
    assert!(result.is_clean());

    result.add_error(SourceError::NotUtf8 {
        path: PathBuf::from("Logo.tsx"),
    });
    assert_eq!(result.error_count(), 1);

    let mapped = result.map(|v| v.len());
    assert_eq!(mapped.data, 2);
    assert_eq!(mapped.error_count(), 1);
}
