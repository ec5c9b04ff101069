//! Event payload types for all Warden events.

/// Payload for `on_triage_started`.
#[derive(Debug, Clone)]
pub struct TriageStartedEvent {
    pub batch_id: String,
    pub item_count: usize,
}

/// Payload for `on_item_triaged`.
#[derive(Debug, Clone)]
pub struct ItemTriagedEvent {
    pub item_id: String,
    pub category: String,
    pub score: f64,
    pub uncertain: bool,
}

/// Payload for `on_model_fallback`. Emitted when a response fails to
/// decode and the item receives the failsafe verdict.
#[derive(Debug, Clone)]
pub struct ModelFallbackEvent {
    pub item_id: String,
    pub message: String,
}

/// Payload for `on_batch_triaged`.
#[derive(Debug, Clone)]
pub struct BatchTriagedEvent {
    pub batch_id: String,
    pub item_count: usize,
    pub urgent: usize,
    pub priority: usize,
    pub review: usize,
    pub duration_ms: u64,
}

/// Payload for `on_brief_generated`.
#[derive(Debug, Clone)]
pub struct BriefGeneratedEvent {
    pub batch_id: String,
    pub format: String,
    pub priority_count: usize,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
