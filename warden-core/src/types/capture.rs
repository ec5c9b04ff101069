//! Capture metadata extracted upstream from EXIF.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GPS coordinate attached to a capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Optional capture metadata. Extraction happens upstream; the engine
/// only formats these values into briefs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureMetadata {
    /// EXIF creation timestamp.
    pub captured_at: Option<DateTime<Utc>>,
    /// EXIF GPS position.
    pub location: Option<GeoPoint>,
}

impl CaptureMetadata {
    /// True when either a timestamp or a position is known.
    pub fn has_any(&self) -> bool {
        self.captured_at.is_some() || self.location.is_some()
    }
}
