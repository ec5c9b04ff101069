//! Shared domain types for the triage engine.

pub mod capture;
pub mod category;
pub mod confidence;
pub mod item;
pub mod label;
pub mod prediction;
pub mod scene;
pub mod score;
pub mod tags;
pub mod triage;
pub mod verification;

pub use capture::{CaptureMetadata, GeoPoint};
pub use category::ThreatCategory;
pub use confidence::Confidence;
pub use item::ClassifiedItem;
pub use label::CanonicalLabel;
pub use prediction::Prediction;
pub use scene::{PoachingIndicator, SceneAnalysis, SceneOverride};
pub use score::ThreatScore;
pub use tags::{ReceiptTag, ReceiptTags};
pub use triage::TriageResult;
pub use verification::{VerificationRecord, VerificationStatus};
