mod error;
mod label_threshold;

pub use error::PostprocessError;
pub use label_threshold::LabelThreshold;
