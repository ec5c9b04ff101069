//! Scene signal resolution: prediction labels merged with structured
//! overrides.

use warden_core::types::{PoachingIndicator, SceneOverride};

/// Labels counted as wildlife when assessing human or vehicle proximity.
static ANIMAL_LABELS: &[&str] = &[
    "bobcat",
    "fox",
    "coyote",
    "raccoon",
    "deer",
    "opossum",
    "skunk",
    "mountain_lion",
    "badger",
    "rhino",
    "elephant",
];

/// True when the label names a wildlife species.
pub fn is_animal_label(label: &str) -> bool {
    ANIMAL_LABELS.contains(&label)
}

/// Boolean threat signals for one capture.
///
/// Resolved from the prediction labels first, then merged with any
/// structured scene override. Overrides suppress label-derived signals
/// but never assert them; arms visibility comes only from the override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneContext {
    pub has_human: bool,
    pub has_vehicle: bool,
    pub has_arms: bool,
    pub has_poaching: bool,
    pub has_animal: bool,
}

impl SceneContext {
    /// Resolve scene signals from lowercased prediction labels (most
    /// likely first) and an optional override.
    pub fn resolve(labels: &[String], scene: Option<&SceneOverride>) -> Self {
        let mut has_human = labels.iter().any(|l| l == "human" || l == "human_with_tool");
        let mut has_vehicle = labels.iter().any(|l| l == "car");
        let mut has_poaching = labels.iter().any(|l| l == "poaching");
        let has_animal = labels.iter().any(|l| is_animal_label(l));
        let mut has_arms = false;

        if let Some(scene) = scene {
            if scene.humans == Some(0) {
                has_human = false;
            }
            if let Some(vehicles) = &scene.vehicles {
                let v = vehicles.to_lowercase();
                if matches!(v.trim(), "none" | "no" | "" | "\u{2014}") {
                    has_vehicle = false;
                }
            }
            if let Some(arms) = &scene.arms_visible {
                let a = arms.to_lowercase();
                let a = a.trim();
                has_arms = !a.is_empty() && a != "none" && a != "no";
            }
            if scene.poaching_indicator == Some(PoachingIndicator::None) {
                has_poaching = false;
            }
        }

        Self { has_human, has_vehicle, has_arms, has_poaching, has_animal }
    }

    /// Number of active threat factors (human, vehicle, arms).
    pub fn threat_factors(&self) -> u32 {
        self.has_human as u32 + self.has_vehicle as u32 + self.has_arms as u32
    }
}
