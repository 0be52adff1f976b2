use ndarray::{Array, IxDyn};
use yolo_postprocess::data::PostprocessError;
use yolo_postprocess::postprocess::{decode, decode_tensor};

// [cx, cy, w, h, objectness, class scores...]
fn row(cx: f32, cy: f32, w: f32, h: f32, scores: &[f32]) -> Vec<f32> {
    let mut v = vec![cx, cy, w, h, 0.0];
    v.extend_from_slice(scores);
    v
}

#[test]
fn denormalizes_to_pixel_coordinates() {
    let predictions = vec![row(0.5, 0.5, 0.2, 0.2, &[0.9, 0.0, 0.0])];

    let candidates = decode(&predictions, 100, 100, 3, 0.5).unwrap();

    assert_eq!(candidates.len(), 1);
    let c = &candidates[0];
    assert_eq!(c.rect.xy_wh(), (40, 40, 20, 20));
    assert_eq!(c.class_id, 0);
    assert_eq!(c.confidence, 0.9);
}

#[test]
fn picks_argmax_class() {
    let predictions = vec![row(0.5, 0.5, 0.1, 0.1, &[0.1, 0.7, 0.6])];

    let candidates = decode(&predictions, 640, 480, 3, 0.5).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].class_id, 1);
    assert_eq!(candidates[0].confidence, 0.7);
}

#[test]
fn confidence_threshold_is_strict() {
    let predictions = vec![
        row(0.5, 0.5, 0.1, 0.1, &[0.5, 0.0, 0.0]),  // exactly at threshold
        row(0.5, 0.5, 0.1, 0.1, &[0.51, 0.0, 0.0]), // just above
    ];

    let candidates = decode(&predictions, 100, 100, 3, 0.5).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].confidence, 0.51);
}

#[test]
fn objectness_is_not_multiplied_in() {
    // Objectness of 0.1 but a winning class score of 0.9: the class score
    // alone is the confidence.
    let mut prediction = row(0.5, 0.5, 0.1, 0.1, &[0.9, 0.0, 0.0]);
    prediction[4] = 0.1;

    let candidates = decode(&[prediction], 100, 100, 3, 0.5).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].confidence, 0.9);
}

#[test]
fn malformed_row_is_skipped_not_fatal() {
    let predictions = vec![
        row(0.5, 0.5, 0.2, 0.2, &[0.9, 0.0, 0.0]),
        vec![0.5, 0.5, 0.2], // wrong length
        row(0.2, 0.2, 0.1, 0.1, &[0.0, 0.8, 0.0]),
    ];

    let candidates = decode(&predictions, 100, 100, 3, 0.5).unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].class_id, 0);
    assert_eq!(candidates[1].class_id, 1);
}

#[test]
fn negative_size_fails_the_run() {
    let predictions = vec![row(0.5, 0.5, -0.2, 0.2, &[0.9, 0.0, 0.0])];

    let err = decode(&predictions, 100, 100, 3, 0.5).unwrap_err();
    assert!(matches!(err, PostprocessError::InvalidGeometry { .. }));
}

#[test]
fn nan_size_fails_the_run() {
    let predictions = vec![row(0.5, 0.5, 0.2, f32::NAN, &[0.9, 0.0, 0.0])];

    let err = decode(&predictions, 100, 100, 3, 0.5).unwrap_err();
    assert!(matches!(err, PostprocessError::InvalidGeometry { .. }));
}

#[test]
fn empty_input_yields_empty_output() {
    let predictions: Vec<Vec<f32>> = Vec::new();
    let candidates = decode(&predictions, 100, 100, 3, 0.5).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn decodes_flattened_tensor() {
    let mut values = row(0.5, 0.5, 0.2, 0.2, &[0.9, 0.0, 0.0]);
    values.extend(row(0.1, 0.1, 0.05, 0.05, &[0.0, 0.0, 0.3]));
    let output = Array::from_shape_vec(IxDyn(&[2, 8]), values).unwrap();

    let candidates = decode_tensor(&output, &[2, 8], 100, 100, 3, 0.5).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].rect.xy_wh(), (40, 40, 20, 20));
}
