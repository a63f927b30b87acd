//! # texalpha
//!
//! Compose image channels into RGBA texture maps.
//!
//! Two operations are provided, each a linear load -> compose -> save run:
//!
//! - [`Pipeline::combine`] merges a color image with the first channel of an
//!   alpha (opacity) image.
//! - [`Pipeline::convert`] turns a grayscale alpha image into an RGBA map for
//!   engines that render in alpha-test ("cutoff") mode.
//!
//! The channel logic itself lives in pure functions over [`PixelGrid`](crate::image::PixelGrid)
//! and can be used without touching the filesystem.
//!
//! ## Example
//!
//! ```no_run
//! use texalpha::{Config, Pipeline};
//!
//! # fn main() -> texalpha::Result<()> {
//! let pipeline = Pipeline::new(Config::default())?;
//!
//! pipeline.combine("albedo.png", "opacity.png", "albedo_rgba.png")?;
//! pipeline.convert("opacity.png", "cutoff.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod logging;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Config, Pipeline};
