//! Engine lifecycle events: typed payloads, handler trait, dispatcher.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::WardenEventHandler;
pub use types::{
    BatchTriagedEvent, BriefGeneratedEvent, ErrorEvent, ItemTriagedEvent, ModelFallbackEvent,
    TriageStartedEvent,
};
