//! Headline numbers surfaced alongside every brief.

use serde::{Deserialize, Serialize};

use warden_core::types::ClassifiedItem;

/// KPIs for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BriefKpis {
    /// Analyst seconds saved by automated triage.
    pub time_saved_seconds: u64,
    /// Share of items audited by a human, in percent with one decimal.
    pub verification_rate: f64,
    /// Items in the urgent or priority buckets.
    pub priority_count: usize,
}

/// Compute KPIs for a batch. An empty batch produces all zeros.
pub fn compute_kpis(items: &[ClassifiedItem], seconds_saved_per_image: u64) -> BriefKpis {
    if items.is_empty() {
        return BriefKpis::default();
    }

    let total = items.len();
    let audited = items
        .iter()
        .filter(|item| item.verification.is_audited())
        .count();
    let priority_count = items
        .iter()
        .filter(|item| item.triage.category.is_high_priority())
        .count();

    BriefKpis {
        time_saved_seconds: total as u64 * seconds_saved_per_image,
        // Rate is reported in percent with one decimal, e.g. 66.7.
        verification_rate: (audited as f64 / total as f64 * 100.0 * 10.0).round() / 10.0,
        priority_count,
    }
}
