//! Threat categories assigned to triaged findings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Triage outcome, ordered from most to least operationally urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatCategory {
    /// Immediate patrol response required.
    Urgent,
    /// Escalated monitoring recommended.
    Priority,
    /// Routed to the human review queue.
    Review,
    /// No threat-relevant content.
    None,
}

impl ThreatCategory {
    /// Category string as stored and displayed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Urgent => "URGENT",
            Self::Priority => "PRIORITY",
            Self::Review => "REVIEW",
            Self::None => "NONE",
        }
    }

    /// Urgent and priority findings are the ones surfaced in brief
    /// summaries and patrol recommendations.
    pub fn is_high_priority(&self) -> bool {
        matches!(self, Self::Urgent | Self::Priority)
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
