//! Token catalog errors.

use super::error_code::{self, BridgeErrorCode};
use crate::types::TokenCategory;

/// Errors raised while loading or querying a token catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{category} token not found: {input}")]
    TokenNotFound {
        category: TokenCategory,
        input: String,
    },

    #[error("duplicate {category} token name: {name}")]
    DuplicateName { category: TokenCategory, name: String },

    #[error("duplicate {category} token alias: {alias}")]
    DuplicateAlias {
        category: TokenCategory,
        alias: String,
    },

    #[error("invalid value for {category} token {name}: {value} ({reason})")]
    InvalidValue {
        category: TokenCategory,
        name: String,
        value: String,
        reason: String,
    },

    #[error("failed to load catalog from {path}: {message}")]
    Load { path: String, message: String },
}

impl BridgeErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TokenNotFound { .. } => error_code::TOKEN_NOT_FOUND,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
