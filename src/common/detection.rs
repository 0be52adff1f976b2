use serde::{Deserialize, Serialize};
use crate::common::Rect;
use crate::postprocess::nms::Nms;

/// An unfiltered, unsuppressed detection proposal emitted by the decoder.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub rect: Rect,
    pub class_id: usize,
    pub confidence: f32,
}

impl Candidate {
    pub fn new(rect: Rect, class_id: usize, confidence: f32) -> Self {
        Self {
            rect,
            class_id,
            confidence,
        }
    }

    /// Sets the bounding box using floating point `(cx, cy, w, h)`.
    pub fn with_cxcy_wh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.rect = Rect::from_cxcy_wh(cx, cy, w, h);
        self
    }

    /// Sets the confidence score of the candidate.
    pub fn with_confidence(mut self, conf: f32) -> Self {
        self.confidence = conf;
        self
    }

    /// Sets the class ID of the candidate.
    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = class_id;
        self
    }
}

impl Nms for Candidate {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn confidence(&self) -> f32 {
        self.confidence
    }

    fn class_id(&self) -> usize {
        self.class_id
    }
}

/// A final, surviving, labeled bounding box.
///
/// Produced by result assembly after suppression and handed to the rendering
/// collaborator; also serializable for machine-readable export.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub rect: Rect,
    pub class_id: usize,
    pub class_name: String,
    pub confidence: f32,
}

impl Detection {
    pub fn new(rect: Rect, class_id: usize, class_name: String, confidence: f32) -> Self {
        Self {
            rect,
            class_id,
            class_name,
            confidence,
        }
    }

    pub fn print_detection(&self) {
        println!(
            "Detection: Class: {} ({}), Rect: {:?}, Confidence: {:.2}",
            self.class_name, self.class_id, self.rect, self.confidence
        );
    }
}

impl Nms for Detection {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn confidence(&self) -> f32 {
        self.confidence
    }

    fn class_id(&self) -> usize {
        self.class_id
    }
}
