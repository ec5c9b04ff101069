//! Patrol protocol constants.
//!
//! Scoring weights and thresholds are fixed by the patrol protocol the
//! classifier enforces. They are named values, not derived ones: the
//! protocol fixes the numbers, not a formula.

/// Score assigned when poaching activity is detected directly.
pub const POACHING_SCORE: f64 = 10.0;

/// Base score for a human or vehicle detected near wildlife.
pub const URGENT_BASE_SCORE: f64 = 4.0;

/// Base score for a human, vehicle, or arms finding without wildlife.
pub const PRIORITY_BASE_SCORE: f64 = 3.0;

/// Score contributed by each active threat factor (human, vehicle, arms).
pub const THREAT_FACTOR_WEIGHT: f64 = 2.0;

/// Extra score when wildlife shares the frame with a human or vehicle.
pub const WILDLIFE_PROXIMITY_BONUS: f64 = 2.0;

/// Top-two probability gap below which predictions count as conflicting.
pub const CONFLICT_MARGIN: f64 = 0.1;

/// Confidence below which a finding is tagged low-confidence.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.55;

/// Manual review seconds saved per automatically triaged image.
pub const SECONDS_SAVED_PER_IMAGE: u64 = 20;

/// Probability substituted for a prediction entry with no usable value.
pub const DEFAULT_PREDICTION_PROB: f64 = 0.5;

/// Probability given to a synthesized poaching prediction when the model
/// response omits its own confidence.
pub const DEFAULT_POACHING_PROB: f64 = 0.85;

/// Confidence reported by the failsafe observation when cloud inference
/// is unavailable.
pub const FAILSAFE_CONFIDENCE: f64 = 0.1;
