use crate::data::LabelThreshold;

/// Thresholding policy for the post-processing pipeline.
///
/// `conf_threshold` is the minimum class score a prediction must exceed
/// (strictly) to become a candidate. `iou_threshold` is the maximum overlap
/// two same-class detections may share before the lower-confidence one is
/// suppressed. Defaults match the reference pipeline (0.5 / 0.4).
#[derive(Debug, Clone)]
pub struct PostprocessConfig {
    pub conf_threshold: f32,
    pub iou_threshold: f32,
    pub label_thresholds: Vec<LabelThreshold>,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.5,
            iou_threshold: 0.4,
            label_thresholds: Vec::new(),
        }
    }
}

impl PostprocessConfig {
    pub fn new(conf_threshold: f32, iou_threshold: f32) -> Self {
        Self {
            conf_threshold,
            iou_threshold,
            label_thresholds: Vec::new(),
        }
    }

    pub fn with_conf_threshold(mut self, conf_threshold: f32) -> Self {
        self.conf_threshold = conf_threshold;
        self
    }

    pub fn with_iou_threshold(mut self, iou_threshold: f32) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    /// Adds a per-label confidence override on top of the base threshold.
    pub fn with_label_threshold(mut self, label_threshold: LabelThreshold) -> Self {
        self.label_thresholds.push(label_threshold);
        self
    }

    /// Returns the effective confidence threshold for a class.
    ///
    /// Per-label overrides never lower the bar below the base threshold.
    pub fn threshold_for(&self, class_id: usize) -> f32 {
        self.label_thresholds
            .iter()
            .find(|lt| lt.id as usize == class_id)
            .map(|lt| lt.threshold.max(self.conf_threshold))
            .unwrap_or(self.conf_threshold)
    }

    pub fn to_string(&self) -> String {
        format!(
            "Confidence Threshold: {}\n\
            IoU Threshold: {}\n\
            Label Overrides: {}",
            self.conf_threshold,
            self.iou_threshold,
            self.label_thresholds.len()
        )
    }
}
