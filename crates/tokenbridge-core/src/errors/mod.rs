//! Error handling for tokenbridge.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod source_error;
pub mod transform_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::BridgeErrorCode;
pub use source_error::SourceError;
pub use transform_error::{BatchResult, TransformError};
