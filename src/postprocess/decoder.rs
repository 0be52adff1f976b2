use ndarray::{Array, IxDyn};

use crate::common::{Candidate, Rect};
use crate::data::PostprocessError;

/// Number of fields preceding the class scores in a raw prediction:
/// center x, center y, width, height, objectness.
pub const BOX_FIELDS: usize = 5;

/// Decodes raw per-cell prediction vectors into candidates in absolute pixel
/// coordinates.
///
/// Each row is `[cx, cy, w, h, objectness, class_0..class_{K-1}]` with
/// coordinates normalized to the image size. The class with the highest score
/// wins and its score alone is the confidence; the objectness field is part
/// of the schema but is not multiplied in, matching the reference decoder.
/// Only rows whose confidence strictly exceeds `conf_threshold` produce a
/// candidate.
///
/// Box math runs in floating point and is truncated toward zero to integer
/// pixels. A row of the wrong length is skipped with a warning so the rest of
/// the batch can proceed; a row that denormalizes to a NaN or negative size
/// fails the whole run.
pub fn decode<R: AsRef<[f32]>>(
    predictions: &[R],
    image_width: u32,
    image_height: u32,
    num_classes: usize,
    conf_threshold: f32,
) -> Result<Vec<Candidate>, PostprocessError> {
    let expected = BOX_FIELDS + num_classes;
    let (img_width, img_height) = (image_width as f32, image_height as f32);
    let mut candidates = Vec::new();

    for (row, prediction) in predictions.iter().enumerate() {
        let prediction = prediction.as_ref();
        if prediction.len() != expected {
            let err = PostprocessError::MalformedPrediction {
                row,
                expected,
                got: prediction.len(),
            };
            log::warn!("skipping prediction: {}", err);
            continue;
        }

        let scores = &prediction[BOX_FIELDS..];
        let (class_id, confidence) = scores
            .iter()
            .copied()
            .enumerate()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .unwrap_or((0, 0.0));

        if confidence <= conf_threshold {
            continue;
        }

        let cx = prediction[0] * img_width;
        let cy = prediction[1] * img_height;
        let w = prediction[2] * img_width;
        let h = prediction[3] * img_height;

        if !w.is_finite() || !h.is_finite() || w < 0.0 || h < 0.0 {
            return Err(PostprocessError::InvalidGeometry {
                row,
                width: w,
                height: h,
            });
        }

        candidates.push(Candidate::new(
            Rect::from_cxcy_wh(cx, cy, w, h),
            class_id,
            confidence,
        ));
    }

    Ok(candidates)
}

/// Decodes a flattened network output tensor of shape `rows x (5 + K)`.
///
/// Front-end for callers that hold the raw output as an `ndarray` tensor
/// rather than a row list.
pub fn decode_tensor(
    output: &Array<f32, IxDyn>,
    output_shape: &[usize],
    image_width: u32,
    image_height: u32,
    num_classes: usize,
    conf_threshold: f32,
) -> Result<Vec<Candidate>, PostprocessError> {
    let expected = BOX_FIELDS + num_classes;
    if output_shape.len() != 2 {
        return Err(PostprocessError::MalformedPrediction {
            row: 0,
            expected,
            got: output.len(),
        });
    }

    let (n_rows, n_cols) = (output_shape[0], output_shape[1]);
    let reshaped = output
        .to_shape((n_rows, n_cols))
        .map_err(|_| PostprocessError::MalformedPrediction {
            row: 0,
            expected: n_rows * n_cols,
            got: output.len(),
        })?;

    let rows: Vec<Vec<f32>> = reshaped
        .outer_iter()
        .map(|row| row.iter().copied().collect())
        .collect();

    decode(&rows, image_width, image_height, num_classes, conf_threshold)
}
