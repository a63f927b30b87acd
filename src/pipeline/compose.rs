//! Channel composition for RGBA texture maps.
//!
//! Everything here is pure: grids in, grid out. Values are copied verbatim,
//! with no scaling, clamping or gamma.

use ndarray::{s, Array3, ArrayView2, Axis};

use crate::error::{Error, Result};
use crate::image::{grid_dims, PixelGrid, ALPHA_INDEX, OPAQUE, RGBA_CHANNELS, RGB_CHANNELS};

/// Merge a color grid and an alpha grid into one RGBA grid.
///
/// Channels 0-2 of the result are the color grid's first three channels
/// (a single gray channel is replicated). Channel 3 is `alpha_channel` of
/// the alpha grid. Any alpha the color grid already had is discarded.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the grids differ in height or width,
/// [`Error::UnsupportedChannels`] if the color grid has 2 or more than 4
/// channels and [`Error::InvalidParameter`] if the alpha grid lacks
/// `alpha_channel`.
pub fn merge_color_alpha(
    color: &PixelGrid,
    alpha: &PixelGrid,
    alpha_channel: usize,
) -> Result<PixelGrid> {
    let expected = grid_dims(color);
    let actual = grid_dims(alpha);
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }

    let mut output = to_rgba(color)?;
    let source = extract_channel(alpha, alpha_channel)?;
    output.index_axis_mut(Axis(2), ALPHA_INDEX).assign(&source);

    Ok(output)
}

/// Expand an alpha image into an RGBA cutoff map.
///
/// The source pixels pass through as the color channels and `alpha_channel`
/// of the source becomes channel 3. Engines in alpha-test mode only read
/// channel 3.
///
/// # Errors
///
/// Returns [`Error::UnsupportedChannels`] or [`Error::InvalidParameter`] under
/// the same conditions as [`merge_color_alpha`].
pub fn expand_alpha(alpha: &PixelGrid, alpha_channel: usize) -> Result<PixelGrid> {
    let source = extract_channel(alpha, alpha_channel)?;
    let mut output = to_rgba(alpha)?;
    output.index_axis_mut(Axis(2), ALPHA_INDEX).assign(&source);

    Ok(output)
}

/// Borrow one channel of a grid as a `height x width` map.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the grid has no such channel.
pub fn extract_channel(grid: &PixelGrid, channel: usize) -> Result<ArrayView2<'_, u8>> {
    let channels = grid.dim().2;
    if channel >= channels {
        return Err(Error::InvalidParameter {
            name: "alpha_channel".to_string(),
            reason: format!("channel {channel} not present in a {channels}-channel image"),
        });
    }

    Ok(grid.index_axis(Axis(2), channel))
}

/// Promote a 1, 3 or 4 channel grid to a fresh RGBA grid.
///
/// Gray is replicated into RGB and missing alpha is filled with [`OPAQUE`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedChannels`] for any other channel count.
pub fn to_rgba(grid: &PixelGrid) -> Result<PixelGrid> {
    let (height, width, channels) = grid.dim();
    let mut output = Array3::from_elem((height, width, RGBA_CHANNELS), OPAQUE);

    match channels {
        1 => {
            let gray = grid.index_axis(Axis(2), 0);
            for channel in 0..RGB_CHANNELS {
                output.index_axis_mut(Axis(2), channel).assign(&gray);
            }
        }
        RGB_CHANNELS => output.slice_mut(s![.., .., ..RGB_CHANNELS]).assign(grid),
        RGBA_CHANNELS => output.assign(grid),
        _ => return Err(Error::UnsupportedChannels { channels }),
    }

    Ok(output)
}
