//! Ranked model predictions.

use serde::{Deserialize, Serialize};

/// One entry of the ranked prediction list. Index 0 is the most likely
/// label; probabilities are taken from the model as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub prob: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, prob: f64) -> Self {
        Self { label: label.into(), prob }
    }
}
