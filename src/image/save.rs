//! Image saving utilities.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{Error, Result};

use super::{PixelGrid, RGBA_CHANNELS};

/// Save an RGBA grid as an image file.
///
/// The grid is:
/// 1. Checked against the output format implied by the extension
/// 2. Encoded fully in memory
/// 3. Written to a sibling temporary file and renamed over `path`
///
/// Nothing is created at `path` unless every step succeeds.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOutputFormat`] for unknown extensions or formats
/// without an alpha channel, [`Error::ImageSave`] if encoding fails and
/// [`Error::Write`] if the bytes cannot be persisted.
pub fn save_image<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let path = path.as_ref();

    let format = output_format(path)?;
    let img = grid_to_image(grid)?;

    let mut encoded = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut encoded), format)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Encoded {} bytes as {format:?}", encoded.len());

    // Write to a temporary file first, then rename for atomicity
    let temp_path = temp_path_for(path);
    let persisted = fs::write(&temp_path, &encoded).and_then(|()| fs::rename(&temp_path, path));
    if let Err(source) = persisted {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Whether the encoder for `format` stores an 8-bit alpha channel losslessly.
#[must_use]
pub fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Tga
            | ImageFormat::Bmp
            | ImageFormat::Ico
            | ImageFormat::Qoi
    )
}

/// Resolve the output format from the extension of `path`.
fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|err| Error::UnsupportedOutputFormat {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    if !supports_alpha(format) {
        return Err(Error::UnsupportedOutputFormat {
            path: path.to_path_buf(),
            reason: format!("{format:?} cannot store an alpha channel"),
        });
    }

    Ok(format)
}

/// Convert a 4-channel HWC grid into an RGBA image buffer.
fn grid_to_image(grid: &PixelGrid) -> Result<RgbaImage> {
    let (height, width, channels) = grid.dim();

    if channels != RGBA_CHANNELS {
        return Err(Error::UnsupportedChannels { channels });
    }

    let to_u32 = |value: usize| {
        u32::try_from(value).map_err(|_| Error::UnsupportedDimensions {
            width,
            height,
            reason: "exceeds encoder limits".to_string(),
        })
    };
    let (w, h) = (to_u32(width)?, to_u32(height)?);

    // Logical iteration order is row-major regardless of memory layout
    let raw: Vec<u8> = grid.iter().copied().collect();

    RgbaImage::from_raw(w, h, raw).ok_or_else(|| Error::UnsupportedDimensions {
        width,
        height,
        reason: "buffer size does not match dimensions".to_string(),
    })
}

/// Sibling path used while writing, e.g. `out.png` -> `out.png.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    path.with_extension(format!("{extension}.tmp"))
}
