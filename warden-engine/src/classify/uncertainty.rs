//! Uncertainty rules for classified captures.

use warden_core::types::{ReceiptTag, ReceiptTags};

/// Inputs to the uncertainty pass.
#[derive(Debug, Clone, Copy)]
pub struct UncertaintyInputs<'a> {
    /// Prediction probabilities, most likely first.
    pub probabilities: &'a [f64],
    /// Overall model confidence.
    pub confidence: f64,
    /// Top prediction label, empties already filtered out.
    pub top_label: &'a str,
    /// Ground-truth label for reference batches.
    pub reference_label: Option<&'a str>,
    /// True when the batch is a calibration run with known labels.
    pub is_reference_batch: bool,
}

/// Outcome of the uncertainty pass.
#[derive(Debug, Clone, Default)]
pub struct UncertaintyAssessment {
    /// True when any rule fired.
    pub uncertain: bool,
    /// Tags for the rules that fired, in firing order.
    pub tags: ReceiptTags,
    /// True specifically for a reference mismatch; drives the safety
    /// rule's reason wording.
    pub reference_mismatch: bool,
}

/// Evaluate the uncertainty rules for one capture.
///
/// Rules are independent: each one that fires appends its receipt tag,
/// and `uncertain` is the OR of all of them. A single prediction never
/// conflicts with itself.
pub fn assess(
    inputs: &UncertaintyInputs<'_>,
    conflict_margin: f64,
    low_confidence_threshold: f64,
) -> UncertaintyAssessment {
    let mut out = UncertaintyAssessment::default();

    let prob_gap = if inputs.probabilities.len() > 1 {
        inputs.probabilities[0] - inputs.probabilities[1]
    } else {
        1.0
    };
    if prob_gap < conflict_margin {
        out.uncertain = true;
        out.tags.push(ReceiptTag::ConflictingLabels);
    }

    if inputs.confidence < low_confidence_threshold {
        out.uncertain = true;
        out.tags.push(ReceiptTag::LowConfidence);
    }

    if inputs.is_reference_batch {
        if let Some(reference) = inputs.reference_label.filter(|r| !r.is_empty()) {
            if inputs.top_label != "unknown" && inputs.top_label != reference {
                out.uncertain = true;
                out.reference_mismatch = true;
                out.tags.push(ReceiptTag::ReferenceMismatch);
            }
        }
    }

    out
}
