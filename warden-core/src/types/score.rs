//! Threat score newtype.

use serde::{Deserialize, Serialize};

/// Numeric threat score attached to every triage verdict.
///
/// Constructed values are always within `[MIN, MAX]` and rounded to one
/// decimal place, so downstream code never re-checks either invariant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreatScore(f64);

impl ThreatScore {
    /// Lowest possible score.
    pub const MIN: f64 = 0.0;
    /// Highest possible score.
    pub const MAX: f64 = 10.0;

    /// Create a score, clamping to `[MIN, MAX]` and rounding to one
    /// decimal. Non-finite input maps to `MIN`.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(Self::MIN);
        }
        let clamped = value.clamp(Self::MIN, Self::MAX);
        Self((clamped * 10.0).round() / 10.0)
    }

    /// The zero score carried by non-threat and review verdicts.
    pub fn zero() -> Self {
        Self(Self::MIN)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ThreatScore {
    fn default() -> Self {
        Self::zero()
    }
}
