//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::{save_image, supports_alpha};

use ndarray::Array3;

/// Decoded pixel data in HWC layout (height, width, channels).
///
/// Channel 0 is the first channel the decoder produced. For color files this
/// is red, not blue; nothing downstream assumes a color meaning for it.
pub type PixelGrid = Array3<u8>;

/// Number of channels in RGBA images.
pub const RGBA_CHANNELS: usize = 4;

/// Number of color channels in RGB(A) images.
pub const RGB_CHANNELS: usize = 3;

/// Index of the opacity channel in an RGBA grid.
pub const ALPHA_INDEX: usize = 3;

/// Fully opaque alpha value.
pub const OPAQUE: u8 = u8::MAX;

/// Returns `(height, width)` of a grid.
#[must_use]
pub fn grid_dims(grid: &PixelGrid) -> (usize, usize) {
    let (height, width, _) = grid.dim();
    (height, width)
}
