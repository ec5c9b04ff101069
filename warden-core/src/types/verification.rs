//! Ranger verification workflow values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Review state of a triaged item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Not yet reviewed by a ranger.
    #[default]
    Unverified,
    /// Ranger confirmed the predicted label.
    Verified,
    /// Ranger replaced the predicted label.
    Corrected,
}

impl VerificationStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unverified => "UNVERIFIED",
            Self::Verified => "VERIFIED",
            Self::Corrected => "CORRECTED",
        }
    }

    /// Verified and corrected items count toward the verification rate
    /// and are eligible for training export.
    pub fn is_audited(&self) -> bool {
        matches!(self, Self::Verified | Self::Corrected)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Audit record written when a ranger corrects a label. The caller
/// persists these to close the learning loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub item_id: String,
    pub predicted_label: String,
    pub corrected_label: String,
    pub user_id: String,
    /// Correction time, Unix milliseconds.
    pub unix_ms: i64,
}
