//! Structured scene analysis supplied alongside raw predictions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured scene description extracted from the vision model's
/// `poaching_analysis` object. Every field is best-effort; the model may
/// omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneAnalysis {
    /// Number of human figures in frame.
    pub humans: Option<u32>,
    /// Free-text vehicle description ("white pickup", "none", ...).
    pub vehicles: Option<String>,
    /// Species the model called out.
    pub species: Option<String>,
    /// Time of capture as reported by the model.
    pub time: Option<String>,
    /// Free-text weapons description.
    pub arms_visible: Option<String>,
    /// Narrative paragraph, preferred over the plain rationale when present.
    pub analysis_paragraph: Option<String>,
}

/// Poaching indicator reported at the top level of a model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoachingIndicator {
    Poaching,
    ConservationDehorning,
    None,
}

impl PoachingIndicator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Poaching => "poaching",
            Self::ConservationDehorning => "conservation_dehorning",
            Self::None => "none",
        }
    }

    /// Parse the model's string form. Unrecognized values are discarded
    /// rather than treated as errors.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "poaching" => Some(Self::Poaching),
            "conservation_dehorning" => Some(Self::ConservationDehorning),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for PoachingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Override signals handed to the classifier when structured scene
/// analysis is available.
///
/// Overrides take precedence over label-derived booleans, and they only
/// ever suppress a signal, never assert one. Arms visibility is the lone
/// signal with no label-derived counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOverride {
    pub humans: Option<u32>,
    pub vehicles: Option<String>,
    pub arms_visible: Option<String>,
    pub poaching_indicator: Option<PoachingIndicator>,
}

impl SceneOverride {
    /// Build the classifier override from a scene analysis plus the
    /// response-level poaching indicator.
    pub fn from_analysis(scene: &SceneAnalysis, indicator: Option<PoachingIndicator>) -> Self {
        Self {
            humans: scene.humans,
            vehicles: scene.vehicles.clone(),
            arms_visible: scene.arms_visible.clone(),
            poaching_indicator: indicator,
        }
    }
}
