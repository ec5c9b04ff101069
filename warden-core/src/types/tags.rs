//! Receipt tags: machine-readable reason codes for uncertainty verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Reason code recorded when an uncertainty rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptTag {
    /// Top-two predictions sit within the conflict margin of each other.
    ConflictingLabels,
    /// Model confidence fell below the low-confidence threshold.
    LowConfidence,
    /// Top label disagrees with the reference batch ground truth.
    ReferenceMismatch,
    /// Caller flagged degraded input, or a label failed normalization.
    LowQualityInput,
}

impl ReceiptTag {
    /// Tag string as stored and displayed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConflictingLabels => "conflicting_labels",
            Self::LowConfidence => "low_confidence",
            Self::ReferenceMismatch => "reference_mismatch",
            Self::LowQualityInput => "low_quality_input",
        }
    }
}

impl fmt::Display for ReceiptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, duplicate-free collection of receipt tags.
///
/// Insertion order is preserved so serialized output reflects the order
/// the rules fired in. Four slots cover every rule without allocating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptTags(SmallVec<[ReceiptTag; 4]>);

impl ReceiptTags {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Add a tag. Duplicates are ignored.
    pub fn push(&mut self, tag: ReceiptTag) {
        if !self.0.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn contains(&self, tag: ReceiptTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceiptTag> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ReceiptTag] {
        &self.0
    }
}
