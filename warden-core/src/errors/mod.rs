//! Error handling for Warden.
//!
//! One error enum per subsystem, `thiserror` only. Every enum carries a
//! stable machine-readable code via [`WardenErrorCode`].

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use error_code::WardenErrorCode;
pub use model_error::ModelError;
pub use pipeline_error::{PipelineError, PipelineResult};
