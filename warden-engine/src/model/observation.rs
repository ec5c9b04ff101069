//! Decoded vision-model observations.

use serde::{Deserialize, Serialize};

use warden_core::constants::FAILSAFE_CONFIDENCE;
use warden_core::types::{PoachingIndicator, Prediction, SceneAnalysis};

/// Model recorded in the evidence trail when none is configured.
pub const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";

/// Model recorded on failsafe observations.
pub const FAILSAFE_MODEL: &str = "mock-failsafe";

/// Rationale attached to failsafe observations.
pub const FAILSAFE_RATIONALE: &str =
    "Cloud intelligence unavailable. Manual verification required.";

/// Everything the pipeline extracts from one model response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelObservation {
    /// Ranked predictions, most likely first. Never empty.
    pub predictions: Vec<Prediction>,
    /// Overall confidence in the top prediction.
    pub confidence: f64,
    /// Free-text explanation of the detection.
    pub rationale: String,
    /// True when the model flagged degraded input or a label failed
    /// normalization.
    pub quality_issue: bool,
    /// True when any label was rewritten during normalization.
    pub normalization_applied: bool,
    /// Response-level poaching indicator.
    pub poaching_indicator: Option<PoachingIndicator>,
    /// Structured scene analysis, when the model supplied one.
    pub scene: Option<SceneAnalysis>,
    /// Model identifier for the evidence trail.
    pub model_used: String,
}

impl ModelObservation {
    /// The observation substituted when a response is missing or not
    /// JSON. Its rock-bottom confidence routes the item to the review
    /// queue.
    pub fn failsafe() -> Self {
        Self {
            predictions: vec![Prediction::new("unknown", FAILSAFE_CONFIDENCE)],
            confidence: FAILSAFE_CONFIDENCE,
            rationale: FAILSAFE_RATIONALE.to_string(),
            quality_issue: true,
            normalization_applied: false,
            poaching_indicator: None,
            scene: None,
            model_used: FAILSAFE_MODEL.to_string(),
        }
    }
}

/// Evidence trail attached to every verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvidence {
    /// Model that produced the observation.
    pub model: String,
    /// Verdict timestamp, Unix milliseconds.
    pub unix_ms: i64,
}
