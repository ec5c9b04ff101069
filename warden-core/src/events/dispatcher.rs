//! Synchronous event dispatch.

use std::sync::Arc;

use super::handler::WardenEventHandler;
use super::types::{
    BatchTriagedEvent, BriefGeneratedEvent, ErrorEvent, ItemTriagedEvent, ModelFallbackEvent,
    TriageStartedEvent,
};

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, `emit` iterates an empty Vec and costs
/// effectively nothing.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn WardenEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn WardenEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler never prevents later handlers from running.
    fn emit<F: Fn(&dyn WardenEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Triage lifecycle ----

    pub fn emit_triage_started(&self, event: &TriageStartedEvent) {
        self.emit(|h| h.on_triage_started(event));
    }

    pub fn emit_item_triaged(&self, event: &ItemTriagedEvent) {
        self.emit(|h| h.on_item_triaged(event));
    }

    pub fn emit_model_fallback(&self, event: &ModelFallbackEvent) {
        self.emit(|h| h.on_model_fallback(event));
    }

    pub fn emit_batch_triaged(&self, event: &BatchTriagedEvent) {
        self.emit(|h| h.on_batch_triaged(event));
    }

    // ---- Reporting ----

    pub fn emit_brief_generated(&self, event: &BriefGeneratedEvent) {
        self.emit(|h| h.on_brief_generated(event));
    }

    // ---- Errors ----

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
