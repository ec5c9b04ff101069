//! Threat classification: the patrol protocol decision tree.

pub mod context;
pub mod uncertainty;

pub use context::SceneContext;
pub use uncertainty::{assess, UncertaintyAssessment, UncertaintyInputs};

use warden_core::constants::{
    POACHING_SCORE, PRIORITY_BASE_SCORE, THREAT_FACTOR_WEIGHT, URGENT_BASE_SCORE,
    WILDLIFE_PROXIMITY_BONUS,
};
use warden_core::types::{
    Prediction, ReceiptTag, ReceiptTags, SceneOverride, ThreatCategory, ThreatScore, TriageResult,
};
use warden_core::TriageConfig;

/// Inputs for classifying one capture.
#[derive(Debug, Clone)]
pub struct ClassifyRequest<'a> {
    /// Normalized predictions, most likely first.
    pub predictions: &'a [Prediction],
    /// Overall model confidence.
    pub confidence: f64,
    /// True when the input was degraded or a label failed normalization.
    pub quality_issue: bool,
    /// Ground-truth label for reference batches.
    pub reference_label: Option<&'a str>,
    /// True when the batch is a calibration run with known labels.
    pub is_reference_batch: bool,
    /// Structured scene override, when available.
    pub scene: Option<&'a SceneOverride>,
}

/// The patrol protocol classifier.
///
/// Pure and deterministic: the same request always yields the same
/// verdict, and classification performs no I/O.
#[derive(Debug, Clone)]
pub struct ThreatClassifier {
    conflict_margin: f64,
    low_confidence_threshold: f64,
}

impl ThreatClassifier {
    /// Classifier with protocol-default thresholds.
    pub fn new() -> Self {
        Self {
            conflict_margin: warden_core::constants::CONFLICT_MARGIN,
            low_confidence_threshold: warden_core::constants::LOW_CONFIDENCE_THRESHOLD,
        }
    }

    /// Classifier with thresholds taken from configuration.
    pub fn with_config(config: &TriageConfig) -> Self {
        Self {
            conflict_margin: config.effective_conflict_margin(),
            low_confidence_threshold: config.effective_low_confidence_threshold(),
        }
    }

    /// Classify one capture.
    pub fn classify(&self, request: &ClassifyRequest<'_>) -> TriageResult {
        let labels: Vec<String> = request
            .predictions
            .iter()
            .map(|p| p.label.to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        let top_label = labels.first().map(String::as_str).unwrap_or("unknown");

        let scene = SceneContext::resolve(&labels, request.scene);
        let factors = scene.threat_factors();

        let mut category = ThreatCategory::None;
        let mut score = 0.0;
        let mut reason = String::from("Standard observation.");
        let mut tags = ReceiptTags::new();
        if request.quality_issue {
            tags.push(ReceiptTag::LowQualityInput);
        }

        // Decision tree, most severe branch first.
        if scene.has_poaching {
            category = ThreatCategory::Urgent;
            score = POACHING_SCORE;
            reason =
                "Poaching activity detected. Immediate patrol response required.".to_string();
        } else if factors > 0 {
            let human_or_vehicle = scene.has_human || scene.has_vehicle;
            if human_or_vehicle && scene.has_animal {
                category = ThreatCategory::Urgent;
                score = URGENT_BASE_SCORE
                    + f64::from(factors) * THREAT_FACTOR_WEIGHT
                    + WILDLIFE_PROXIMITY_BONUS;
                reason = "Human or vehicle detected near wildlife. Possible poaching risk — escalate."
                    .to_string();
            } else if human_or_vehicle {
                category = ThreatCategory::Priority;
                score = PRIORITY_BASE_SCORE + f64::from(factors) * THREAT_FACTOR_WEIGHT;
                reason = "Human or vehicle in frame. Monitor for wildlife proximity.".to_string();
            } else {
                // Only arms left among the factors.
                category = ThreatCategory::Priority;
                score = PRIORITY_BASE_SCORE + f64::from(factors) * THREAT_FACTOR_WEIGHT;
                reason = "Arms or weapons visible. Escalate for review.".to_string();
            }
        } else if scene.has_animal || top_label == "empty" {
            if top_label == "empty" {
                reason = "Clear frame.".to_string();
            } else {
                category = ThreatCategory::Review;
                reason = format!(
                    "Wildlife detected: {top_label}. No humans, vehicles, or arms — threat level 0."
                );
            }
        }

        let probabilities: Vec<f64> = request.predictions.iter().map(|p| p.prob).collect();
        let assessment = assess(
            &UncertaintyInputs {
                probabilities: &probabilities,
                confidence: request.confidence,
                top_label,
                reference_label: request.reference_label,
                is_reference_batch: request.is_reference_batch,
            },
            self.conflict_margin,
            self.low_confidence_threshold,
        );
        for tag in assessment.tags.iter() {
            tags.push(*tag);
        }

        // Safety rule: uncertainty never downgrades an urgent verdict,
        // it annotates it; every other uncertain verdict routes to the
        // review queue with its score intact.
        if assessment.uncertain {
            if category == ThreatCategory::Urgent {
                reason.push_str(" [High Uncertainty: Needs human confirmation]");
            } else {
                category = ThreatCategory::Review;
                reason = if assessment.reference_mismatch {
                    "System detected mismatch with benchmark; routing for verification."
                        .to_string()
                } else {
                    "High uncertainty detected; routing for human review.".to_string()
                };
            }
        }

        TriageResult {
            category,
            score: ThreatScore::new(score),
            reason,
            uncertainty_flag: assessment.uncertain,
            tags,
        }
    }
}

impl Default for ThreatClassifier {
    fn default() -> Self {
        Self::new()
    }
}
