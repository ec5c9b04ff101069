//! Lenient decoding of untrusted model responses.

use serde_json::Value;

use warden_core::constants::{DEFAULT_POACHING_PROB, DEFAULT_PREDICTION_PROB};
use warden_core::errors::ModelError;
use warden_core::types::{PoachingIndicator, Prediction, SceneAnalysis};

use super::observation::{ModelObservation, DEFAULT_MODEL_NAME};
use crate::normalize::normalize_label;

/// Decode a raw response body.
///
/// Returns `Err` only when the body is not JSON at all. Every structural
/// oddity inside valid JSON is absorbed by [`decode_value`] instead.
pub fn decode_response(body: &str) -> Result<ModelObservation, ModelError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ModelError::InvalidJson {
        message: e.to_string(),
    })?;
    Ok(decode_value(&value))
}

/// Decode an already-parsed JSON value.
///
/// Total: never fails. Each field falls back independently, so one
/// malformed field never poisons the rest of the observation.
pub fn decode_value(value: &Value) -> ModelObservation {
    let indicator = value
        .get("poaching_indicator")
        .and_then(Value::as_str)
        .and_then(PoachingIndicator::from_name);

    // `top_predictions` wins over the legacy `predictions` key.
    let raw_predictions = value
        .get("top_predictions")
        .or_else(|| value.get("predictions"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut predictions = Vec::with_capacity(raw_predictions.len() + 1);
    let mut quality_issue = false;
    let mut normalization_applied = false;

    // A poaching indicator forces a synthetic poaching prediction into
    // the top slot regardless of the model's own ranking. No
    // deduplication: a ranked poaching entry stays where it was.
    if indicator == Some(PoachingIndicator::Poaching) {
        let prob = value
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_POACHING_PROB);
        predictions.push(Prediction::new("poaching", prob));
    }

    for raw in raw_predictions {
        let raw_label = match raw.get("label") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => "unknown".to_string(),
        };
        let prob = raw
            .get("prob")
            .and_then(Value::as_f64)
            .or_else(|| raw.get("probability").and_then(Value::as_f64))
            .unwrap_or(DEFAULT_PREDICTION_PROB);

        let normalized = normalize_label(&raw_label);
        if normalized.is_unknown() {
            quality_issue = true;
        }
        if normalized.was_normalized() {
            normalization_applied = true;
        }
        predictions.push(Prediction::new(normalized.label(), prob));
    }

    if predictions.is_empty() {
        predictions.push(Prediction::new("unknown", DEFAULT_PREDICTION_PROB));
    }

    let confidence = value.get("confidence").and_then(Value::as_f64).unwrap_or_else(|| {
        predictions
            .first()
            .map(|p| p.prob)
            .unwrap_or(DEFAULT_PREDICTION_PROB)
    });

    let mut rationale = value
        .get("rationale")
        .and_then(Value::as_str)
        .or_else(|| value.get("explanation").and_then(Value::as_str))
        .or_else(|| value.get("description").and_then(Value::as_str))
        .unwrap_or("")
        .to_string();

    if value
        .get("quality_issue")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        quality_issue = true;
    }

    let mut scene = None;
    if let Some(pa) = value.get("poaching_analysis").and_then(Value::as_object) {
        let paragraph = pa
            .get("analysisParagraph")
            .and_then(Value::as_str)
            .map(String::from);
        scene = Some(SceneAnalysis {
            humans: pa.get("humans").and_then(Value::as_u64).map(|n| n as u32),
            vehicles: pa.get("vehicles").and_then(Value::as_str).map(String::from),
            species: pa.get("species").and_then(Value::as_str).map(String::from),
            time: pa.get("time").and_then(Value::as_str).map(String::from),
            arms_visible: pa.get("armsVisible").and_then(Value::as_str).map(String::from),
            analysis_paragraph: paragraph.clone().or_else(|| {
                if rationale.is_empty() {
                    None
                } else {
                    Some(rationale.clone())
                }
            }),
        });
        // A real paragraph supersedes the plain rationale.
        if let Some(p) = paragraph.filter(|p| !p.is_empty()) {
            rationale = p;
        }
    }

    ModelObservation {
        predictions,
        confidence,
        rationale,
        quality_issue,
        normalization_applied,
        poaching_indicator: indicator,
        scene,
        model_used: DEFAULT_MODEL_NAME.to_string(),
    }
}
