
mod class_catalog;
mod detection;
mod frame_info;
mod palette;
mod postprocess_config;
mod rect;

pub use class_catalog::*;
pub use detection::*;
pub use frame_info::*;
pub use palette::*;
pub use postprocess_config::*;
pub use rect::*;
