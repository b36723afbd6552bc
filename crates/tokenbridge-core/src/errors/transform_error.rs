//! Batch errors and non-fatal error collection.

use super::error_code::{self, BridgeErrorCode};
use super::{CatalogError, ConfigError, SourceError};

/// Errors that can occur while running an analyze or transform batch.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to transform {path}: {message}")]
    File { path: String, message: String },
}

impl BridgeErrorCode for TransformError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::File { .. } => error_code::TRANSFORM_ERROR,
        }
    }
}

/// Result of a batch that accumulates non-fatal errors.
/// Partial results are returned even when some files fail.
#[derive(Debug, Default)]
pub struct BatchResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the batch.
    pub errors: Vec<TransformError>,
}

impl<T: Default> BatchResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<TransformError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Transform the data while carrying the collected errors along.
    pub fn map<U: Default>(self, f: impl FnOnce(T) -> U) -> BatchResult<U> {
        BatchResult {
            data: f(self.data),
            errors: self.errors,
        }
    }
}
