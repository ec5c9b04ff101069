//! Review-queue rollups and priority ranking.

use serde::{Deserialize, Serialize};

use warden_core::types::{ClassifiedItem, ThreatCategory};

use crate::brief::{Brief, BriefKpis};

/// Placeholder shown for batches whose brief has not been generated.
pub const NO_BRIEF_PLACEHOLDER: &str = "No brief generated yet. Generate from results page.";

/// Per-category tallies for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub urgent: usize,
    pub priority: usize,
    pub review: usize,
    pub total_images: usize,
}

impl QueueCounts {
    /// Tally one batch. Items outside the three review buckets count
    /// toward the total only.
    pub fn from_items(items: &[ClassifiedItem]) -> Self {
        let mut counts = Self {
            total_images: items.len(),
            ..Self::default()
        };
        for item in items {
            match item.triage.category {
                ThreatCategory::Urgent => counts.urgent += 1,
                ThreatCategory::Priority => counts.priority += 1,
                ThreatCategory::Review => counts.review += 1,
                ThreatCategory::None => {}
            }
        }
        counts
    }

    fn add(&mut self, other: &Self) {
        self.urgent += other.urgent;
        self.priority += other.priority;
        self.review += other.review;
        self.total_images += other.total_images;
    }
}

/// One batch's inputs to the queue rollup.
#[derive(Debug, Clone)]
pub struct BatchQueueInput<'a> {
    pub batch_id: &'a str,
    pub batch_name: &'a str,
    pub created_at_ms: i64,
    /// Brief for the batch, when one has been generated.
    pub brief: Option<&'a Brief>,
    pub items: &'a [ClassifiedItem],
}

/// One batch's row in the review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchQueueEntry {
    pub batch_id: String,
    pub batch_name: String,
    pub created_at_ms: i64,
    pub brief_text: String,
    pub kpis: BriefKpis,
    pub counts: QueueCounts,
}

/// The assembled review queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSummary {
    pub batches: Vec<BatchQueueEntry>,
    pub totals: QueueCounts,
}

/// Roll batches up into a queue summary. Input order is preserved.
pub fn aggregate_queue(batches: &[BatchQueueInput<'_>]) -> QueueSummary {
    let mut summary = QueueSummary::default();
    for batch in batches {
        let counts = QueueCounts::from_items(batch.items);
        summary.totals.add(&counts);
        summary.batches.push(BatchQueueEntry {
            batch_id: batch.batch_id.to_string(),
            batch_name: batch.batch_name.to_string(),
            created_at_ms: batch.created_at_ms,
            brief_text: batch
                .brief
                .map(|brief| brief.text.clone())
                .unwrap_or_else(|| NO_BRIEF_PLACEHOLDER.to_string()),
            kpis: batch.brief.map(|brief| brief.kpis).unwrap_or_default(),
            counts,
        });
    }
    summary
}

/// Order items for review: score descending, then confidence
/// descending. The sort is stable, so equal items keep arrival order.
pub fn rank_items(items: &mut [ClassifiedItem]) {
    items.sort_by(|a, b| {
        b.triage
            .score
            .value()
            .total_cmp(&a.triage.score.value())
            .then_with(|| {
                let conf_a = a.confidence.map(|c| c.value()).unwrap_or(0.0);
                let conf_b = b.confidence.map(|c| c.value()).unwrap_or(0.0);
                conf_b.total_cmp(&conf_a)
            })
    });
}
