#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Per-test scratch directory under the system temp dir, removed on drop.
pub struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("texalpha-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)
            .expect("read scratch dir")
            .map(|entry| entry.expect("dir entry").path())
            .collect();
        files.sort();
        files
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Writes a solid RGB image.
pub fn write_solid_rgb(path: &Path, width: u32, height: u32, pixel: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(pixel))
        .save(path)
        .expect("write rgb fixture");
}

/// Writes a grayscale image from row-major values.
pub fn write_gray(path: &Path, width: u32, height: u32, values: &[u8]) {
    GrayImage::from_raw(width, height, values.to_vec())
        .expect("gray fixture size")
        .save(path)
        .expect("write gray fixture");
}

/// Writes a horizontal gray gradient.
pub fn write_gradient(path: &Path, width: u32, height: u32) {
    GrayImage::from_fn(width, height, |x, _| Luma([(x * 255 / width.max(2).saturating_sub(1)) as u8]))
        .save(path)
        .expect("write gradient fixture");
}
