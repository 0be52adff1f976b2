use thiserror::Error;

/// Failure taxonomy for the post-processing pipeline.
///
/// A malformed row inside an otherwise valid batch is not surfaced through
/// this enum; the decoder skips it with a recorded warning. Geometry and
/// catalog problems fail the whole run.
#[derive(Debug, Error)]
pub enum PostprocessError {
    #[error("malformed prediction at row {row}: expected {expected} values, got {got}")]
    MalformedPrediction {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid geometry at row {row}: width={width}, height={height}")]
    InvalidGeometry { row: usize, width: f32, height: f32 },

    #[error("unknown class id {class_id}, catalog has {num_classes} classes")]
    UnknownClassId {
        class_id: usize,
        num_classes: usize,
    },

    #[error("class catalog is empty")]
    EmptyCatalog,

    #[error("failed to read class catalog")]
    CatalogIo(#[from] std::io::Error),
}
