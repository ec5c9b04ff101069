//! Pipeline errors and non-fatal error collection.

use super::config_error::ConfigError;
use super::error_code::WardenErrorCode;
use super::model_error::ModelError;

/// Errors that can occur during a triage pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl WardenErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of a pipeline run that accumulates non-fatal errors.
///
/// A batch always returns a verdict for every item; items whose responses
/// failed to decode carry failsafe verdicts, and the decode errors land
/// here for the caller to inspect.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self { data, errors: Vec::new() }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
