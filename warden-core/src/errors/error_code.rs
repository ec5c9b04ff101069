//! Stable error codes for logs and error events.

/// Machine-readable code for configuration errors.
pub const CONFIG_ERROR: &str = "WARDEN_CONFIG_ERROR";

/// Machine-readable code for vision-model response errors.
pub const MODEL_ERROR: &str = "WARDEN_MODEL_ERROR";

/// Maps every Warden error to a stable machine-readable code.
///
/// Codes survive refactors of the error text, so log pipelines and event
/// consumers can match on them.
pub trait WardenErrorCode {
    fn error_code(&self) -> &'static str;
}
