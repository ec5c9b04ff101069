//! warden-engine: the triage pipeline for camera-trap imagery.
//!
//! Takes raw vision-model responses through to patrol verdicts:
//! - Normalize: free-text labels into the closed taxonomy
//! - Classify: the patrol protocol decision tree with uncertainty receipts
//! - Model: lenient decoding of untrusted responses, with a failsafe
//! - Pipeline: batch orchestration with events and error collection

pub mod classify;
pub mod model;
pub mod normalize;
pub mod pipeline;

// Re-exports for convenience
pub use classify::{ClassifyRequest, ThreatClassifier};
pub use model::{decode_response, decode_value, ModelEvidence, ModelObservation};
pub use normalize::{normalize_label, NormalizedLabel};
pub use pipeline::{BatchTriageContext, ItemInput, ItemTriage, TriagePipeline};
