//! Training-set export from human-audited verdicts.

use serde::{Deserialize, Serialize};

use warden_core::types::ClassifiedItem;

/// One fine-tuning example derived from an audited item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub item_id: String,
    pub file_name: Option<String>,
    /// What the model detected.
    pub predicted_label: String,
    /// What the auditor confirmed, or corrected it to.
    pub corrected_label: String,
    pub rationale: Option<String>,
    pub verified_at_ms: Option<i64>,
}

/// Export audited items as training examples.
///
/// Unverified items are skipped. A confirmation without a correction
/// repeats the predicted label in the corrected slot, so every example
/// carries a usable ground truth.
pub fn export_training_set(items: &[ClassifiedItem]) -> Vec<TrainingExample> {
    items
        .iter()
        .filter(|item| item.verification.is_audited())
        .map(|item| {
            let predicted = item
                .detected_label
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            let corrected = item
                .corrected_label
                .as_deref()
                .filter(|label| !label.is_empty())
                .map(String::from)
                .unwrap_or_else(|| predicted.clone());
            TrainingExample {
                item_id: item.item_id.clone(),
                file_name: item.file_name.clone(),
                predicted_label: predicted,
                corrected_label: corrected,
                rationale: item.rationale.clone(),
                verified_at_ms: item.verified_at_ms,
            }
        })
        .collect()
}
