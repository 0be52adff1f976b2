mod assemble;
mod decoder;
mod filter;
pub mod nms;

pub use assemble::assemble;
pub use decoder::{decode, decode_tensor, BOX_FIELDS};
pub use filter::{apply_label_thresholds, filter_by_confidence};
pub use nms::{suppress, Nms};
