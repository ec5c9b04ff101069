//! Triage threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the threat classifier.
///
/// All fields are optional; `effective_*` accessors fall back to the
/// patrol protocol defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Top-two probability gap treated as a label conflict. Default: 0.1.
    pub conflict_margin: Option<f64>,
    /// Confidence below which findings are tagged low-confidence.
    /// Default: 0.55.
    pub low_confidence_threshold: Option<f64>,
}

impl TriageConfig {
    pub fn effective_conflict_margin(&self) -> f64 {
        self.conflict_margin.unwrap_or(constants::CONFLICT_MARGIN)
    }

    pub fn effective_low_confidence_threshold(&self) -> f64 {
        self.low_confidence_threshold
            .unwrap_or(constants::LOW_CONFIDENCE_THRESHOLD)
    }
}
