use crate::common::{Candidate, ClassCatalog, Detection};
use crate::data::PostprocessError;

/// Maps kept candidate indices to final labeled detections.
///
/// Output order follows `kept`, i.e. confidence descending as produced by
/// suppression. Fails if any candidate's class id falls outside the catalog.
pub fn assemble(
    candidates: &[Candidate],
    kept: &[usize],
    catalog: &ClassCatalog,
) -> Result<Vec<Detection>, PostprocessError> {
    let mut detections = Vec::with_capacity(kept.len());
    for &index in kept {
        let candidate = &candidates[index];
        let class_name = catalog.name(candidate.class_id)?;
        detections.push(Detection::new(
            candidate.rect,
            candidate.class_id,
            class_name.to_string(),
            candidate.confidence,
        ));
    }
    Ok(detections)
}
