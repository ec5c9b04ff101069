//! Vision-model response handling.

pub mod decode;
pub mod observation;

pub use decode::{decode_response, decode_value};
pub use observation::{
    ModelEvidence, ModelObservation, DEFAULT_MODEL_NAME, FAILSAFE_MODEL, FAILSAFE_RATIONALE,
};
