use serde::{Deserialize, Serialize};

/// Confidence override for a single class, on top of the base threshold.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct LabelThreshold {
    pub id: u16,
    pub label: String,
    pub threshold: f32,
}

impl LabelThreshold {
    pub fn new(id: u16, label: String, threshold: f32) -> Self {
        Self {
            id,
            label,
            threshold,
        }
    }

    /// True when a confidence value clears this override.
    pub fn check_conf(&self, conf: f32) -> bool {
        conf > self.threshold
    }
}
