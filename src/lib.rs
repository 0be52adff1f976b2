mod utils;
pub mod common;
pub mod data;
pub mod postprocess;

use std::time::Instant;
use ndarray::{Array, IxDyn};
use crate::common::{Candidate, ClassCatalog, Detection, FrameInfo, PostprocessConfig};
use crate::data::PostprocessError;
use crate::postprocess::{apply_label_thresholds, assemble, decode, decode_tensor, suppress};

pub type Result<T, E = PostprocessError> = std::result::Result<T, E>;

/// Loads the class catalog from a one-name-per-line text file.
pub fn load_classes(labels_path: &str) -> anyhow::Result<ClassCatalog> {
    let catalog = ClassCatalog::from_file(labels_path)?;
    log::info!("Loaded {} classes from {}", catalog.num_classes(), labels_path);
    Ok(catalog)
}

/// Runs the full post-processing pipeline for one image:
/// decode, per-label confidence overrides, greedy per-class NMS, assembly.
pub fn run_postprocess<R: AsRef<[f32]>>(
    predictions: &[R],
    frame: &FrameInfo,
    catalog: &ClassCatalog,
    config: &PostprocessConfig,
) -> anyhow::Result<Vec<Detection>> {
    let now = Instant::now();
    let mut _elapsed = now.elapsed();

    let candidates = decode(
        predictions,
        frame.img_width,
        frame.img_height,
        catalog.num_classes(),
        config.conf_threshold,
    )?;
    _elapsed = utils::trace("Decode", now, _elapsed);

    finish_pipeline(candidates, catalog, config, now, _elapsed)
}

/// Same as [`run_postprocess`], for callers holding the network output as a
/// flattened `rows x (5 + K)` tensor.
pub fn run_postprocess_tensor(
    output: &Array<f32, IxDyn>,
    output_shape: &[usize],
    frame: &FrameInfo,
    catalog: &ClassCatalog,
    config: &PostprocessConfig,
) -> anyhow::Result<Vec<Detection>> {
    let now = Instant::now();
    let mut _elapsed = now.elapsed();

    let candidates = decode_tensor(
        output,
        output_shape,
        frame.img_width,
        frame.img_height,
        catalog.num_classes(),
        config.conf_threshold,
    )?;
    _elapsed = utils::trace("Decode", now, _elapsed);

    finish_pipeline(candidates, catalog, config, now, _elapsed)
}

fn finish_pipeline(
    candidates: Vec<Candidate>,
    catalog: &ClassCatalog,
    config: &PostprocessConfig,
    now: Instant,
    mut _elapsed: std::time::Duration,
) -> anyhow::Result<Vec<Detection>> {
    let candidates = apply_label_thresholds(candidates, config);
    _elapsed = utils::trace("Label thresholds", now, _elapsed);

    let kept = suppress(&candidates, config.iou_threshold)?;
    _elapsed = utils::trace("NMS", now, _elapsed);

    let detections = assemble(&candidates, &kept, catalog)?;
    _elapsed = utils::trace("Assemble", now, _elapsed);

    log::debug!(
        "Postprocessing time: {:?}, {} detections",
        now.elapsed(),
        detections.len()
    );
    Ok(detections)
}

/// Serializes detections as JSON, one record per detection.
pub fn detections_to_json(detections: &[Detection]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(detections)?)
}
