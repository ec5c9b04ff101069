//! The batch triage pipeline: decode, classify, emit.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use warden_core::errors::{ModelError, PipelineResult, WardenErrorCode};
use warden_core::events::{
    BatchTriagedEvent, ErrorEvent, EventDispatcher, ItemTriagedEvent, ModelFallbackEvent,
    TriageStartedEvent, WardenEventHandler,
};
use warden_core::types::{
    CaptureMetadata, ClassifiedItem, Confidence, Prediction, SceneAnalysis, SceneOverride,
    ThreatCategory, TriageResult, VerificationStatus,
};
use warden_core::WardenConfig;

use crate::classify::{ClassifyRequest, ThreatClassifier};
use crate::model::{decode_response, ModelEvidence, ModelObservation, DEFAULT_MODEL_NAME};

/// Batch-level inputs shared by every item in a run.
#[derive(Debug, Clone, Default)]
pub struct BatchTriageContext<'a> {
    /// Batch identifier carried into events and logs.
    pub batch_id: &'a str,
    /// True for calibration batches with known ground-truth labels.
    pub is_reference_batch: bool,
    /// Model recorded in the evidence trail. Defaults to the primary
    /// vision model.
    pub model_name: Option<&'a str>,
}

/// Raw inputs for one item.
#[derive(Debug, Clone)]
pub struct ItemInput<'a> {
    pub item_id: &'a str,
    /// Raw model response body. `None` triggers the failsafe.
    pub response_body: Option<&'a str>,
    /// Ground-truth label for reference batches.
    pub reference_label: Option<&'a str>,
}

/// Full pipeline output for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTriage {
    pub item_id: String,
    /// Normalized predictions, most likely first.
    pub predictions: Vec<Prediction>,
    pub confidence: f64,
    /// Rationale, with the completion fallback already applied.
    pub rationale: String,
    /// True when any label was rewritten during normalization.
    pub normalization_applied: bool,
    /// Structured scene analysis, when present.
    pub scene: Option<SceneAnalysis>,
    pub evidence: ModelEvidence,
    pub triage: TriageResult,
}

impl ItemTriage {
    /// Convert to the report-facing item shape, attaching capture
    /// metadata extracted upstream.
    pub fn into_classified(self, capture: CaptureMetadata) -> ClassifiedItem {
        let detected_label = self.predictions.first().map(|p| p.label.clone());
        ClassifiedItem {
            item_id: self.item_id,
            file_name: None,
            triage: self.triage,
            detected_label,
            corrected_label: None,
            rationale: Some(self.rationale),
            confidence: Some(Confidence::new(self.confidence)),
            verification: VerificationStatus::Unverified,
            verified_at_ms: None,
            capture,
        }
    }
}

/// Orchestrates decode, classification, and event emission for batches.
pub struct TriagePipeline {
    classifier: ThreatClassifier,
    dispatcher: EventDispatcher,
}

impl TriagePipeline {
    /// Pipeline with protocol-default thresholds.
    pub fn new() -> Self {
        Self {
            classifier: ThreatClassifier::new(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Pipeline with thresholds taken from configuration.
    pub fn with_config(config: &WardenConfig) -> Self {
        Self {
            classifier: ThreatClassifier::with_config(&config.triage),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Register an observer for pipeline events.
    pub fn register_handler(&mut self, handler: Arc<dyn WardenEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Triage one already-decoded observation.
    pub fn triage_observation(
        &self,
        item_id: &str,
        observation: ModelObservation,
        reference_label: Option<&str>,
        is_reference_batch: bool,
    ) -> ItemTriage {
        let scene_override = observation
            .scene
            .as_ref()
            .map(|scene| SceneOverride::from_analysis(scene, observation.poaching_indicator));

        let ModelObservation {
            predictions,
            confidence,
            rationale,
            quality_issue,
            normalization_applied,
            scene,
            model_used,
            ..
        } = observation;

        let triage = self.classifier.classify(&ClassifyRequest {
            predictions: &predictions,
            confidence,
            quality_issue,
            reference_label,
            is_reference_batch,
            scene: scene_override.as_ref(),
        });

        let rationale = if rationale.is_empty() {
            "Analysis completed.".to_string()
        } else {
            rationale
        };

        ItemTriage {
            item_id: item_id.to_string(),
            predictions,
            confidence,
            rationale,
            normalization_applied,
            scene,
            evidence: ModelEvidence {
                model: model_used,
                unix_ms: Utc::now().timestamp_millis(),
            },
            triage,
        }
    }

    /// Triage a whole batch.
    ///
    /// Undecodable responses never abort the run: the affected item falls
    /// back to the failsafe observation and the decode error is collected
    /// on the result.
    pub fn triage_batch(
        &self,
        context: &BatchTriageContext<'_>,
        items: &[ItemInput<'_>],
    ) -> PipelineResult<Vec<ItemTriage>> {
        let started = Instant::now();
        let mut result = PipelineResult::new(Vec::with_capacity(items.len()));

        self.dispatcher.emit_triage_started(&TriageStartedEvent {
            batch_id: context.batch_id.to_string(),
            item_count: items.len(),
        });
        tracing::info!(batch_id = context.batch_id, items = items.len(), "triage started");

        let model_name = context.model_name.unwrap_or(DEFAULT_MODEL_NAME);

        for item in items {
            let observation = match item.response_body {
                Some(body) => match decode_response(body) {
                    Ok(mut observation) => {
                        observation.model_used = model_name.to_string();
                        observation
                    }
                    Err(err) => {
                        self.report_fallback(item.item_id, &err);
                        result.add_error(err.into());
                        ModelObservation::failsafe()
                    }
                },
                None => {
                    let err = ModelError::EmptyResponse;
                    self.report_fallback(item.item_id, &err);
                    result.add_error(err.into());
                    ModelObservation::failsafe()
                }
            };

            let triaged = self.triage_observation(
                item.item_id,
                observation,
                item.reference_label,
                context.is_reference_batch,
            );

            self.dispatcher.emit_item_triaged(&ItemTriagedEvent {
                item_id: triaged.item_id.clone(),
                category: triaged.triage.category.name().to_string(),
                score: triaged.triage.score.value(),
                uncertain: triaged.triage.uncertainty_flag,
            });

            result.data.push(triaged);
        }

        let urgent = count_category(&result.data, ThreatCategory::Urgent);
        let priority = count_category(&result.data, ThreatCategory::Priority);
        let review = count_category(&result.data, ThreatCategory::Review);

        self.dispatcher.emit_batch_triaged(&BatchTriagedEvent {
            batch_id: context.batch_id.to_string(),
            item_count: result.data.len(),
            urgent,
            priority,
            review,
            duration_ms: started.elapsed().as_millis() as u64,
        });
        tracing::info!(
            batch_id = context.batch_id,
            urgent,
            priority,
            review,
            errors = result.error_count(),
            "triage completed"
        );

        result
    }

    fn report_fallback(&self, item_id: &str, error: &ModelError) {
        tracing::warn!(item_id, error = %error, "model response unusable; applying failsafe");
        self.dispatcher.emit_model_fallback(&ModelFallbackEvent {
            item_id: item_id.to_string(),
            message: error.to_string(),
        });
        self.dispatcher.emit_error(&ErrorEvent {
            message: error.to_string(),
            error_code: error.error_code().to_string(),
        });
    }
}

impl Default for TriagePipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn count_category(items: &[ItemTriage], category: ThreatCategory) -> usize {
    items.iter().filter(|i| i.triage.category == category).count()
}
