//! Component source errors.

use std::path::PathBuf;

use super::error_code::{self, BridgeErrorCode};

/// Errors raised while locating components and reading their files.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("component directory not found: {path}")]
    ComponentDirMissing { path: PathBuf },

    #[error("invalid component pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("File is not valid UTF-8: {path}")]
    NotUtf8 { path: PathBuf },
}

impl BridgeErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ComponentDirMissing { .. } => error_code::COMPONENT_NOT_FOUND,
            _ => error_code::SOURCE_ERROR,
        }
    }
}
