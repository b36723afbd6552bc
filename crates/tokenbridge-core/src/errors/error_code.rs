//! BridgeErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so the CLI (and any other shell)
/// can report a structured code alongside the message.
pub trait BridgeErrorCode {
    /// Returns the error code string (e.g., "TOKEN_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const TOKEN_NOT_FOUND: &str = "TOKEN_NOT_FOUND";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const COMPONENT_NOT_FOUND: &str = "COMPONENT_NOT_FOUND";
pub const TRANSFORM_ERROR: &str = "TRANSFORM_ERROR";
