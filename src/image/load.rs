//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use ndarray::Array3;

use crate::error::{Error, Result};

use super::PixelGrid;

/// Load an image from disk into a [`PixelGrid`].
///
/// The image is:
/// 1. Opened from the specified path
/// 2. Decoded using the format sniffed from its content (extension as fallback)
/// 3. Narrowed to 8 bits per channel if needed
/// 4. Returned as an HWC grid with 1, 3 or 4 channels
///
/// Values are not resized or color corrected. Gray+alpha images come back as
/// 4 channels with the gray value replicated into RGB.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if the path cannot be opened and
/// [`Error::ImageLoad`] if its content cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
            source: std::io::Error::other("path is a directory"),
        });
    }

    let reader = ImageReader::open(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let img = reader
        .with_guessed_format()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source: ImageError::IoError(source),
        })?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    image_to_grid(img)
}

/// Convert a `DynamicImage` into an 8-bit HWC grid.
pub(crate) fn image_to_grid(img: DynamicImage) -> Result<PixelGrid> {
    let (width, height) = img.dimensions();
    let (width, height) = (width as usize, height as usize);

    let (channels, raw) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => {
            let color = other.color();
            if color.has_alpha() {
                (4, other.into_rgba8().into_raw())
            } else if color.has_color() {
                (3, other.into_rgb8().into_raw())
            } else {
                (1, other.into_luma8().into_raw())
            }
        }
    };

    Array3::from_shape_vec((height, width, channels), raw).map_err(|err| {
        Error::UnsupportedDimensions {
            width,
            height,
            reason: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, LumaA, Rgb, RgbImage, Rgba};

    #[test]
    fn test_gray_keeps_single_channel() {
        let img = GrayImage::from_raw(2, 1, vec![7, 9]).unwrap();
        let grid = image_to_grid(DynamicImage::ImageLuma8(img)).unwrap();

        assert_eq!(grid.dim(), (1, 2, 1));
        assert_eq!(grid[[0, 1, 0]], 9);
    }

    #[test]
    fn test_rgb_is_row_major() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, Rgb([1, 2, 3]));
        img.put_pixel(0, 1, Rgb([4, 5, 6]));
        let grid = image_to_grid(DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(grid.dim(), (2, 2, 3));
        assert_eq!(grid[[0, 1, 2]], 3);
        assert_eq!(grid[[1, 0, 0]], 4);
    }

    #[test]
    fn test_gray_alpha_becomes_rgba() {
        let img: ImageBuffer<LumaA<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(1, 1, LumaA([40, 200]));
        let grid = image_to_grid(DynamicImage::ImageLumaA8(img)).unwrap();

        assert_eq!(grid.dim(), (1, 1, 4));
        assert_eq!(grid.as_slice().unwrap(), &[40, 40, 40, 200]);
    }

    #[test]
    fn test_sixteen_bit_is_narrowed() {
        let img: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgba([u16::MAX, 0, u16::MAX, u16::MAX]));
        let grid = image_to_grid(DynamicImage::ImageRgba16(img)).unwrap();

        assert_eq!(grid.as_slice().unwrap(), &[255, 0, 255, 255]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_image("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }
}
