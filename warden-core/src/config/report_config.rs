//! Report synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for brief synthesis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Manual review seconds saved per triaged image. Default: 20.
    pub seconds_saved_per_image: Option<u64>,
}

impl ReportConfig {
    pub fn effective_seconds_saved_per_image(&self) -> u64 {
        self.seconds_saved_per_image
            .unwrap_or(constants::SECONDS_SAVED_PER_IMAGE)
    }
}
