//! Event handler trait with default no-op methods.

use super::types::{
    BatchTriagedEvent, BriefGeneratedEvent, ErrorEvent, ItemTriagedEvent, ModelFallbackEvent,
    TriageStartedEvent,
};

/// Observer for engine lifecycle events.
///
/// Every method has a no-op default, so handlers implement only the
/// events they care about. Handlers must not assume they are the only
/// registered observer; the dispatcher isolates handler panics.
pub trait WardenEventHandler: Send + Sync {
    fn on_triage_started(&self, _event: &TriageStartedEvent) {}
    fn on_item_triaged(&self, _event: &ItemTriagedEvent) {}
    fn on_model_fallback(&self, _event: &ModelFallbackEvent) {}
    fn on_batch_triaged(&self, _event: &BatchTriagedEvent) {}
    fn on_brief_generated(&self, _event: &BriefGeneratedEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
