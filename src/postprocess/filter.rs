use crate::common::{Candidate, PostprocessConfig};

/// Keeps candidates whose confidence strictly exceeds `threshold`.
///
/// Stable: survivors keep their relative order.
pub fn filter_by_confidence(candidates: Vec<Candidate>, threshold: f32) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| c.confidence > threshold)
        .collect()
}

/// Applies per-label confidence overrides from the config.
///
/// Classes without an override keep the base threshold, which the decoder has
/// already enforced.
pub fn apply_label_thresholds(
    candidates: Vec<Candidate>,
    config: &PostprocessConfig,
) -> Vec<Candidate> {
    if config.label_thresholds.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|c| c.confidence > config.threshold_for(c.class_id))
        .collect()
}
