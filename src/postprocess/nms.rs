use crate::common::Rect;
use crate::data::PostprocessError;

/// Anything greedy suppression can operate on.
pub trait Nms {
    fn rect(&self) -> &Rect;
    fn confidence(&self) -> f32;
    fn class_id(&self) -> usize;

    /// Computes the intersection over union (IoU) between this bounding box and another.
    fn iou(&self, other: &Self) -> f32 {
        self.rect().iou(other.rect())
    }
}

/// Greedy per-class non-maximum suppression.
///
/// Returns the indices of the candidates to keep, in keep order (confidence
/// descending). Candidates are visited by confidence descending with ties
/// broken by original index ascending, so the output is deterministic. A
/// candidate is kept when its IoU with every already-kept candidate of the
/// same class is at most `iou_threshold`; candidates of different classes
/// never suppress each other.
pub fn suppress<T: Nms>(candidates: &[T], iou_threshold: f32) -> Result<Vec<usize>, PostprocessError> {
    for (row, candidate) in candidates.iter().enumerate() {
        let rect = candidate.rect();
        if rect.w < 0 || rect.h < 0 {
            return Err(PostprocessError::InvalidGeometry {
                row,
                width: rect.w as f32,
                height: rect.h as f32,
            });
        }
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .confidence()
            .partial_cmp(&candidates[a].confidence())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut kept: Vec<usize> = Vec::new();
    for &index in &order {
        let drop = kept.iter().any(|&prev_index| {
            candidates[prev_index].class_id() == candidates[index].class_id()
                && candidates[prev_index].iou(&candidates[index]) > iou_threshold
        });
        if !drop {
            kept.push(index);
        }
    }

    Ok(kept)
}
