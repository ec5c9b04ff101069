//! Model confidence newtype.

use serde::{Deserialize, Serialize};

/// Vision-model confidence in its top prediction, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    /// Create a confidence, clamping to `[0, 1]`. Non-finite input maps
    /// to `MIN`.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::MIN)
    }
}
