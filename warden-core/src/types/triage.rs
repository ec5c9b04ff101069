//! The classifier's verdict for a single capture.

use serde::{Deserialize, Serialize};

use super::category::ThreatCategory;
use super::score::ThreatScore;
use super::tags::ReceiptTags;

/// Verdict produced by the threat classifier for one capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    /// Operational category driving queue placement.
    pub category: ThreatCategory,
    /// Threat score in `[0, 10]`, one decimal.
    pub score: ThreatScore,
    /// Human-readable explanation shown to rangers.
    pub reason: String,
    /// True when any uncertainty rule fired.
    pub uncertainty_flag: bool,
    /// Reason codes behind the uncertainty flag.
    pub tags: ReceiptTags,
}
