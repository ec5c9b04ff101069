//! Vision-model response errors.

use super::error_code::{self, WardenErrorCode};

/// Errors raised while decoding an untrusted vision-model response.
///
/// These are the only errors the pipeline treats as non-fatal: each one
/// is recorded and the affected item falls back to the failsafe
/// observation instead of aborting the batch.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model response is not valid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,
}

impl WardenErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
