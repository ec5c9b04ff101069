//! warden-report: the reporting surface over triaged batches.
//!
//! - Brief: surveillance and patrol narratives with batch KPIs
//! - Queue: review-queue rollups and priority ranking
//! - Training: audited verdicts exported as fine-tuning examples

pub mod brief;
pub mod escape;
pub mod queue;
pub mod training;

// Re-exports for convenience
pub use brief::{
    available_formats, compute_kpis, create_renderer, BatchContext, Brief, BriefKpis,
    BriefRenderer, BriefSynthesizer, PatrolRenderer, SurveillanceRenderer,
};
pub use escape::escape_html;
pub use queue::{
    aggregate_queue, rank_items, BatchQueueEntry, BatchQueueInput, QueueCounts, QueueSummary,
    NO_BRIEF_PLACEHOLDER,
};
pub use training::{export_training_set, TrainingExample};
