//! warden-core: Shared foundation for the Warden camera-trap triage engine.
//!
//! This crate provides the pieces every other Warden crate builds on:
//! - Types: taxonomy labels, threat categories, scores, triage verdicts
//! - Errors: one `thiserror` enum per subsystem, stable error codes
//! - Config: layered TOML configuration with environment overrides
//! - Events: synchronous dispatcher with typed payloads and panic isolation
//! - Telemetry: tracing subscriber initialization
//! - Constants: patrol protocol thresholds and scoring weights

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod telemetry;
pub mod types;

// Re-exports for convenience
pub use config::{ReportConfig, TriageConfig, WardenConfig};
pub use errors::{ConfigError, ModelError, PipelineError, PipelineResult, WardenErrorCode};
pub use events::EventDispatcher;
pub use types::{
    CanonicalLabel, CaptureMetadata, ClassifiedItem, Confidence, GeoPoint, PoachingIndicator,
    Prediction, ReceiptTag, ReceiptTags, SceneAnalysis, SceneOverride, ThreatCategory,
    ThreatScore, TriageResult, VerificationRecord, VerificationStatus,
};
