//! A fully classified item as consumed by report synthesis.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::capture::CaptureMetadata;
use super::confidence::Confidence;
use super::triage::TriageResult;
use super::verification::{VerificationRecord, VerificationStatus};

/// One triaged capture, ready for brief synthesis and queue aggregation.
///
/// Built by the caller from persisted pipeline output; the engine itself
/// never stores these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    /// Storage identifier. Its suffix appears in brief narratives.
    pub item_id: String,
    /// Original upload file name, kept for training export.
    pub file_name: Option<String>,
    /// Classifier verdict.
    pub triage: TriageResult,
    /// Top predicted label after normalization.
    pub detected_label: Option<String>,
    /// Ranger-supplied replacement label.
    pub corrected_label: Option<String>,
    /// Model rationale shown in brief narratives.
    pub rationale: Option<String>,
    /// Model confidence, used as the ranking tiebreaker.
    pub confidence: Option<Confidence>,
    /// Ranger review state.
    pub verification: VerificationStatus,
    /// When the item was verified or corrected, Unix milliseconds.
    pub verified_at_ms: Option<i64>,
    /// EXIF-derived capture metadata.
    pub capture: CaptureMetadata,
}

impl ClassifiedItem {
    /// Label shown to rangers. A non-empty correction wins over the
    /// detection; a missing or empty detection reads as "unknown".
    pub fn display_label(&self) -> &str {
        self.corrected_label
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.detected_label.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("unknown")
    }

    /// Mark the item as reviewed and confirmed.
    pub fn mark_verified(&mut self) {
        self.verification = VerificationStatus::Verified;
        self.verified_at_ms = Some(Utc::now().timestamp_millis());
    }

    /// Replace the predicted label and produce the audit record for the
    /// caller to persist.
    pub fn apply_correction(
        &mut self,
        corrected_label: impl Into<String>,
        user_id: impl Into<String>,
    ) -> VerificationRecord {
        let corrected = corrected_label.into();
        let now_ms = Utc::now().timestamp_millis();
        self.corrected_label = Some(corrected.clone());
        self.verification = VerificationStatus::Corrected;
        self.verified_at_ms = Some(now_ms);
        VerificationRecord {
            item_id: self.item_id.clone(),
            predicted_label: self
                .detected_label
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            corrected_label: corrected,
            user_id: user_id.into(),
            unix_ms: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::category::ThreatCategory;
    use crate::types::score::ThreatScore;
    use crate::types::tags::ReceiptTags;

    fn make_item(detected: Option<&str>, corrected: Option<&str>) -> ClassifiedItem {
        ClassifiedItem {
            item_id: "img_001".to_string(),
            file_name: None,
            triage: TriageResult {
                category: ThreatCategory::Review,
                score: ThreatScore::zero(),
                reason: "Wildlife detected: deer. No humans, vehicles, or arms — threat level 0."
                    .to_string(),
                uncertainty_flag: false,
                tags: ReceiptTags::new(),
            },
            detected_label: detected.map(String::from),
            corrected_label: corrected.map(String::from),
            rationale: None,
            confidence: None,
            verification: VerificationStatus::Unverified,
            verified_at_ms: None,
            capture: CaptureMetadata::default(),
        }
    }

    #[test]
    fn display_label_prefers_correction() {
        let item = make_item(Some("deer"), Some("elk"));
        assert_eq!(item.display_label(), "elk");
    }

    #[test]
    fn display_label_skips_empty_correction() {
        let item = make_item(Some("deer"), Some(""));
        assert_eq!(item.display_label(), "deer");
    }

    #[test]
    fn display_label_falls_back_to_unknown() {
        let item = make_item(None, None);
        assert_eq!(item.display_label(), "unknown");
    }

    #[test]
    fn apply_correction_updates_status_and_returns_record() {
        let mut item = make_item(Some("deer"), None);
        let record = item.apply_correction("coyote", "guest-ranger");
        assert_eq!(item.verification, VerificationStatus::Corrected);
        assert_eq!(item.corrected_label.as_deref(), Some("coyote"));
        assert_eq!(item.verified_at_ms, Some(record.unix_ms));
        assert_eq!(record.predicted_label, "deer");
        assert_eq!(record.corrected_label, "coyote");
        assert_eq!(record.user_id, "guest-ranger");
        assert!(record.unix_ms > 0);
    }

    #[test]
    fn mark_verified_stamps_the_audit_time() {
        let mut item = make_item(Some("deer"), None);
        item.mark_verified();
        assert_eq!(item.verification, VerificationStatus::Verified);
        assert!(item.verified_at_ms.is_some());
    }

    #[test]
    fn apply_correction_without_detection_records_unknown() {
        let mut item = make_item(None, None);
        let record = item.apply_correction("rhino", "guest-ranger");
        assert_eq!(record.predicted_label, "unknown");
    }
}
