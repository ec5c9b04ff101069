//! Classification tests: the decision tree, scene overrides, uncertainty
//! receipts, and the safety rule.

use warden_core::types::{
    PoachingIndicator, Prediction, ReceiptTag, SceneOverride, ThreatCategory, TriageResult,
};
use warden_core::TriageConfig;
use warden_engine::classify::{ClassifyRequest, ThreatClassifier};

fn make_predictions(entries: &[(&str, f64)]) -> Vec<Prediction> {
    entries.iter().map(|(label, prob)| Prediction::new(*label, *prob)).collect()
}

fn classify(
    predictions: &[Prediction],
    confidence: f64,
    scene: Option<&SceneOverride>,
) -> TriageResult {
    ThreatClassifier::new().classify(&ClassifyRequest {
        predictions,
        confidence,
        quality_issue: false,
        reference_label: None,
        is_reference_batch: false,
        scene,
    })
}

fn classify_reference(
    predictions: &[Prediction],
    confidence: f64,
    reference_label: Option<&str>,
    is_reference_batch: bool,
) -> TriageResult {
    ThreatClassifier::new().classify(&ClassifyRequest {
        predictions,
        confidence,
        quality_issue: false,
        reference_label,
        is_reference_batch,
        scene: None,
    })
}

// ---- Decision tree ----

#[test]
fn poaching_is_urgent_with_maximum_score() {
    let predictions = make_predictions(&[("poaching", 0.9), ("rhino", 0.05)]);
    let verdict = classify(&predictions, 0.9, None);
    assert_eq!(verdict.category, ThreatCategory::Urgent);
    assert_eq!(verdict.score.value(), 10.0);
    assert_eq!(
        verdict.reason,
        "Poaching activity detected. Immediate patrol response required."
    );
    assert!(!verdict.uncertainty_flag);
    assert!(verdict.tags.is_empty());
}

#[test]
fn human_near_wildlife_is_urgent() {
    let predictions = make_predictions(&[("human", 0.62), ("deer", 0.31)]);
    let verdict = classify(&predictions, 0.62, None);
    assert_eq!(verdict.category, ThreatCategory::Urgent);
    assert_eq!(verdict.score.value(), 8.0);
    assert_eq!(
        verdict.reason,
        "Human or vehicle detected near wildlife. Possible poaching risk — escalate."
    );
}

#[test]
fn human_alone_is_priority() {
    let predictions = make_predictions(&[("human", 0.8)]);
    let verdict = classify(&predictions, 0.8, None);
    assert_eq!(verdict.category, ThreatCategory::Priority);
    assert_eq!(verdict.score.value(), 5.0);
    assert_eq!(verdict.reason, "Human or vehicle in frame. Monitor for wildlife proximity.");
}

#[test]
fn vehicle_alone_is_priority() {
    let predictions = make_predictions(&[("car", 0.71)]);
    let verdict = classify(&predictions, 0.71, None);
    assert_eq!(verdict.category, ThreatCategory::Priority);
    assert_eq!(verdict.score.value(), 5.0);
}

#[test]
fn human_and_vehicle_without_wildlife_stack_factors() {
    let predictions = make_predictions(&[("human", 0.5), ("car", 0.4)]);
    let verdict = classify(&predictions, 0.6, None);
    assert_eq!(verdict.category, ThreatCategory::Priority);
    assert_eq!(verdict.score.value(), 7.0);
}

#[test]
fn arms_without_human_or_vehicle_are_priority() {
    let predictions = make_predictions(&[("deer", 0.8)]);
    let scene = SceneOverride {
        arms_visible: Some("rifle leaning against tree".to_string()),
        ..Default::default()
    };
    let verdict = classify(&predictions, 0.8, Some(&scene));
    assert_eq!(verdict.category, ThreatCategory::Priority);
    assert_eq!(verdict.score.value(), 5.0);
    assert_eq!(verdict.reason, "Arms or weapons visible. Escalate for review.");
}

#[test]
fn all_three_factors_with_wildlife_cap_at_ten() {
    let predictions = make_predictions(&[("human", 0.5), ("car", 0.3), ("deer", 0.15)]);
    let scene = SceneOverride {
        arms_visible: Some("rifle".to_string()),
        ..Default::default()
    };
    let verdict = classify(&predictions, 0.6, Some(&scene));
    assert_eq!(verdict.category, ThreatCategory::Urgent);
    // 4 + 3 factors * 2 + 2 would be 12; the scale tops out at 10.
    assert_eq!(verdict.score.value(), 10.0);
}

#[test]
fn wildlife_only_lands_in_review_at_zero() {
    let predictions = make_predictions(&[("deer", 0.92)]);
    let verdict = classify(&predictions, 0.92, None);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert_eq!(verdict.score.value(), 0.0);
    assert_eq!(
        verdict.reason,
        "Wildlife detected: deer. No humans, vehicles, or arms — threat level 0."
    );
}

#[test]
fn badger_counts_as_wildlife() {
    let predictions = make_predictions(&[("badger", 0.88)]);
    let verdict = classify(&predictions, 0.88, None);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert_eq!(
        verdict.reason,
        "Wildlife detected: badger. No humans, vehicles, or arms — threat level 0."
    );

    let near_human = make_predictions(&[("human", 0.6), ("badger", 0.3)]);
    let verdict = classify(&near_human, 0.6, None);
    assert_eq!(verdict.category, ThreatCategory::Urgent);
}

#[test]
fn empty_frame_is_clear() {
    let predictions = make_predictions(&[("empty", 0.95)]);
    let verdict = classify(&predictions, 0.95, None);
    assert_eq!(verdict.category, ThreatCategory::None);
    assert_eq!(verdict.score.value(), 0.0);
    assert_eq!(verdict.reason, "Clear frame.");
}

#[test]
fn unrecognized_label_is_a_standard_observation() {
    let predictions = make_predictions(&[("pangolin", 0.8)]);
    let verdict = classify(&predictions, 0.8, None);
    assert_eq!(verdict.category, ThreatCategory::None);
    assert_eq!(verdict.score.value(), 0.0);
    assert_eq!(verdict.reason, "Standard observation.");
}

#[test]
fn no_predictions_is_a_standard_observation() {
    let verdict = classify(&[], 0.9, None);
    assert_eq!(verdict.category, ThreatCategory::None);
    assert_eq!(verdict.reason, "Standard observation.");
}

#[test]
fn blank_labels_are_skipped_when_picking_the_top() {
    let predictions = make_predictions(&[("", 0.6), ("deer", 0.3)]);
    let verdict = classify(&predictions, 0.9, None);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.reason.contains("Wildlife detected: deer."));
}

// ---- Scene overrides ----

#[test]
fn zero_humans_override_demotes_a_human_detection() {
    let predictions = make_predictions(&[("human", 0.7), ("deer", 0.2)]);
    let scene = SceneOverride { humans: Some(0), ..Default::default() };
    let verdict = classify(&predictions, 0.7, Some(&scene));
    // With the human suppressed only wildlife remains; the top label is
    // still the suppressed "human" string.
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.reason.contains("Wildlife detected: human."));
}

#[test]
fn vehicle_override_negation_demotes_a_car_detection() {
    let predictions = make_predictions(&[("car", 0.8)]);
    for negation in ["None", "no", "", "—"] {
        let scene = SceneOverride {
            vehicles: Some(negation.to_string()),
            ..Default::default()
        };
        let verdict = classify(&predictions, 0.8, Some(&scene));
        assert_eq!(verdict.category, ThreatCategory::None, "{negation:?}");
        assert_eq!(verdict.reason, "Standard observation.");
    }
}

#[test]
fn poaching_indicator_none_suppresses_a_poaching_label() {
    let predictions = make_predictions(&[("poaching", 0.85), ("deer", 0.1)]);
    let scene = SceneOverride {
        poaching_indicator: Some(PoachingIndicator::None),
        ..Default::default()
    };
    let verdict = classify(&predictions, 0.85, Some(&scene));
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert_eq!(verdict.score.value(), 0.0);
}

// ---- Uncertainty and the safety rule ----

#[test]
fn conflicting_top_two_routes_to_review() {
    let predictions = make_predictions(&[("coyote", 0.48), ("fox", 0.42)]);
    let verdict = classify(&predictions, 0.8, None);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.uncertainty_flag);
    assert!(verdict.tags.contains(ReceiptTag::ConflictingLabels));
    assert_eq!(verdict.reason, "High uncertainty detected; routing for human review.");
}

#[test]
fn low_confidence_routes_to_review() {
    let predictions = make_predictions(&[("deer", 0.5)]);
    let verdict = classify(&predictions, 0.4, None);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.tags.contains(ReceiptTag::LowConfidence));
    assert_eq!(verdict.reason, "High uncertainty detected; routing for human review.");
}

#[test]
fn urgent_survives_uncertainty_with_an_annotation() {
    let predictions = make_predictions(&[("poaching", 0.9), ("rhino", 0.85)]);
    let verdict = classify(&predictions, 0.9, None);
    assert_eq!(verdict.category, ThreatCategory::Urgent);
    assert_eq!(verdict.score.value(), 10.0);
    assert!(verdict.uncertainty_flag);
    assert_eq!(verdict.tags.as_slice(), &[ReceiptTag::ConflictingLabels]);
    assert_eq!(
        verdict.reason,
        "Poaching activity detected. Immediate patrol response required. \
         [High Uncertainty: Needs human confirmation]"
    );
}

#[test]
fn comfortable_margin_leaves_urgent_untagged() {
    let predictions = make_predictions(&[("poaching", 0.9), ("rhino", 0.75)]);
    let verdict = classify(&predictions, 0.9, None);
    assert_eq!(verdict.category, ThreatCategory::Urgent);
    assert!(!verdict.uncertainty_flag);
    assert!(verdict.tags.is_empty());
    assert_eq!(
        verdict.reason,
        "Poaching activity detected. Immediate patrol response required."
    );
}

#[test]
fn demoted_priority_keeps_its_score() {
    let predictions = make_predictions(&[("human", 0.5)]);
    let verdict = classify(&predictions, 0.5, None);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert_eq!(verdict.score.value(), 5.0);
    assert_eq!(verdict.reason, "High uncertainty detected; routing for human review.");
}

#[test]
fn reference_mismatch_routes_for_verification() {
    let predictions = make_predictions(&[("deer", 0.9)]);
    let verdict = classify_reference(&predictions, 0.9, Some("coyote"), true);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.tags.contains(ReceiptTag::ReferenceMismatch));
    assert_eq!(
        verdict.reason,
        "System detected mismatch with benchmark; routing for verification."
    );
}

#[test]
fn reference_match_stays_clean() {
    let predictions = make_predictions(&[("deer", 0.9)]);
    let verdict = classify_reference(&predictions, 0.9, Some("deer"), true);
    assert!(!verdict.uncertainty_flag);
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.reason.contains("Wildlife detected: deer."));
}

#[test]
fn reference_labels_are_ignored_outside_reference_batches() {
    let predictions = make_predictions(&[("deer", 0.9)]);
    let verdict = classify_reference(&predictions, 0.9, Some("coyote"), false);
    assert!(!verdict.tags.contains(ReceiptTag::ReferenceMismatch));
}

#[test]
fn unknown_top_label_never_counts_as_a_mismatch() {
    let predictions = make_predictions(&[("unknown", 0.9)]);
    let verdict = classify_reference(&predictions, 0.9, Some("deer"), true);
    assert!(!verdict.tags.contains(ReceiptTag::ReferenceMismatch));
}

#[test]
fn mismatch_wording_wins_when_other_rules_also_fire() {
    let predictions = make_predictions(&[("deer", 0.9)]);
    let verdict = classify_reference(&predictions, 0.4, Some("coyote"), true);
    assert_eq!(
        verdict.tags.as_slice(),
        &[ReceiptTag::LowConfidence, ReceiptTag::ReferenceMismatch]
    );
    assert_eq!(
        verdict.reason,
        "System detected mismatch with benchmark; routing for verification."
    );
}

#[test]
fn quality_issue_tags_without_raising_the_flag() {
    let predictions = make_predictions(&[("deer", 0.9)]);
    let verdict = ThreatClassifier::new().classify(&ClassifyRequest {
        predictions: &predictions,
        confidence: 0.9,
        quality_issue: true,
        reference_label: None,
        is_reference_batch: false,
        scene: None,
    });
    assert!(!verdict.uncertainty_flag);
    assert_eq!(verdict.tags.as_slice(), &[ReceiptTag::LowQualityInput]);
    // No demotion: the wildlife verdict stands.
    assert_eq!(verdict.category, ThreatCategory::Review);
    assert!(verdict.reason.contains("Wildlife detected: deer."));
}

#[test]
fn quality_issue_tag_precedes_uncertainty_tags() {
    let predictions = make_predictions(&[("deer", 0.5)]);
    let verdict = ThreatClassifier::new().classify(&ClassifyRequest {
        predictions: &predictions,
        confidence: 0.4,
        quality_issue: true,
        reference_label: None,
        is_reference_batch: false,
        scene: None,
    });
    assert_eq!(
        verdict.tags.as_slice(),
        &[ReceiptTag::LowQualityInput, ReceiptTag::LowConfidence]
    );
}

// ---- Configured thresholds ----

#[test]
fn custom_conflict_margin_applies() {
    let config = TriageConfig { conflict_margin: Some(0.2), low_confidence_threshold: None };
    let classifier = ThreatClassifier::with_config(&config);
    let predictions = make_predictions(&[("coyote", 0.55), ("fox", 0.4)]);
    let verdict = classifier.classify(&ClassifyRequest {
        predictions: &predictions,
        confidence: 0.8,
        quality_issue: false,
        reference_label: None,
        is_reference_batch: false,
        scene: None,
    });
    // A 0.15 gap clears the default margin but not the widened one.
    assert!(verdict.tags.contains(ReceiptTag::ConflictingLabels));
}

#[test]
fn custom_low_confidence_threshold_applies() {
    let config = TriageConfig { conflict_margin: None, low_confidence_threshold: Some(0.3) };
    let classifier = ThreatClassifier::with_config(&config);
    let predictions = make_predictions(&[("deer", 0.5)]);
    let verdict = classifier.classify(&ClassifyRequest {
        predictions: &predictions,
        confidence: 0.4,
        quality_issue: false,
        reference_label: None,
        is_reference_batch: false,
        scene: None,
    });
    // 0.4 confidence clears a 0.3 threshold.
    assert!(!verdict.tags.contains(ReceiptTag::LowConfidence));
}
