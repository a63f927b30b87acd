//! Channel composition pipeline.

mod compose;
mod process;

pub use compose::{expand_alpha, extract_channel, merge_color_alpha, to_rgba};
pub use process::{Config, Pipeline};
