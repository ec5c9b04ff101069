//! The closed taxonomy of canonical labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A member of the fixed detection taxonomy.
///
/// Canonical labels are only produced by the normalizer or parsed from an
/// already-canonical string; free-text model output never becomes a
/// `CanonicalLabel` without passing through normalization first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalLabel {
    /// Frame with no detectable subject.
    Empty,
    Human,
    Car,
    Bobcat,
    Fox,
    Coyote,
    Raccoon,
    Deer,
    Opossum,
    Skunk,
    MountainLion,
    Rhino,
    Elephant,
    /// Active poaching activity.
    Poaching,
    /// Sanctioned dehorning operation, visually similar to poaching.
    ConservationDehorning,
    /// Human carrying a tool or weapon.
    HumanWithTool,
    /// Sentinel for labels that failed normalization.
    Unknown,
}

impl CanonicalLabel {
    /// Every taxonomy member, in protocol order.
    pub const ALL: &'static [CanonicalLabel] = &[
        Self::Empty,
        Self::Human,
        Self::Car,
        Self::Bobcat,
        Self::Fox,
        Self::Coyote,
        Self::Raccoon,
        Self::Deer,
        Self::Opossum,
        Self::Skunk,
        Self::MountainLion,
        Self::Rhino,
        Self::Elephant,
        Self::Poaching,
        Self::ConservationDehorning,
        Self::HumanWithTool,
        Self::Unknown,
    ];

    /// Label string as stored and displayed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Human => "human",
            Self::Car => "car",
            Self::Bobcat => "bobcat",
            Self::Fox => "fox",
            Self::Coyote => "coyote",
            Self::Raccoon => "raccoon",
            Self::Deer => "deer",
            Self::Opossum => "opossum",
            Self::Skunk => "skunk",
            Self::MountainLion => "mountain_lion",
            Self::Rhino => "rhino",
            Self::Elephant => "elephant",
            Self::Poaching => "poaching",
            Self::ConservationDehorning => "conservation_dehorning",
            Self::HumanWithTool => "human_with_tool",
            Self::Unknown => "unknown",
        }
    }

    /// Parse an already-canonical label string. Anything else is `None`;
    /// this never performs normalization.
    pub fn from_canonical_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|label| label.name() == s)
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_round_trips_through_its_name() {
        for label in CanonicalLabel::ALL {
            assert_eq!(CanonicalLabel::from_canonical_str(label.name()), Some(*label));
        }
    }

    #[test]
    fn non_canonical_strings_do_not_parse() {
        assert_eq!(CanonicalLabel::from_canonical_str("Mountain Lion"), None);
        assert_eq!(CanonicalLabel::from_canonical_str("puma"), None);
        assert_eq!(CanonicalLabel::from_canonical_str(""), None);
    }

    #[test]
    fn serde_form_matches_name() {
        let json = serde_json::to_string(&CanonicalLabel::MountainLion).unwrap();
        assert_eq!(json, "\"mountain_lion\"");
        let back: CanonicalLabel = serde_json::from_str("\"conservation_dehorning\"").unwrap();
        assert_eq!(back, CanonicalLabel::ConservationDehorning);
    }
}
