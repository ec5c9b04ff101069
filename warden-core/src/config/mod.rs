//! Layered configuration for the Warden engine.

pub mod report_config;
pub mod triage_config;
pub mod warden_config;

pub use report_config::ReportConfig;
pub use triage_config::TriageConfig;
pub use warden_config::WardenConfig;
