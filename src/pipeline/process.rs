//! Load, compose and save pipeline shared by both tools.

use std::path::Path;

use crate::error::{Error, Result};
use crate::image::{self, RGBA_CHANNELS};

use super::compose::{expand_alpha, merge_color_alpha};

/// Configuration for the composition pipeline.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Decoded channel used as the opacity source. 0 is the first channel
    /// after decode, which is red for color files.
    pub alpha_channel: usize,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.alpha_channel >= RGBA_CHANNELS {
            return Err(Error::InvalidParameter {
                name: "alpha_channel".to_string(),
                reason: format!("must be less than {RGBA_CHANNELS}"),
            });
        }

        Ok(())
    }
}

/// Runs the linear load -> compose -> save sequence for each tool.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing pipeline with config: {config:?}");

        Ok(Self { config })
    }

    /// Combine a color image and an alpha image into one RGBA image.
    ///
    /// # Arguments
    ///
    /// * `color_path` - Image providing channels 0-2
    /// * `alpha_path` - Image whose configured channel becomes the opacity
    /// * `output_path` - Destination; format follows the extension
    ///
    /// # Errors
    ///
    /// Returns an error if either input cannot be loaded, the images differ
    /// in size, or the output cannot be written.
    pub fn combine<P, Q, R>(&self, color_path: P, alpha_path: Q, output_path: R) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let (color_path, alpha_path, output_path) =
            (color_path.as_ref(), alpha_path.as_ref(), output_path.as_ref());

        tracing::info!("Loading color image: {}", color_path.display());
        let color =
            image::load_image(color_path).map_err(|err| err.in_stage("load color image"))?;
        tracing::debug!("Color grid shape: {:?}", color.dim());

        tracing::info!("Loading alpha image: {}", alpha_path.display());
        let alpha =
            image::load_image(alpha_path).map_err(|err| err.in_stage("load alpha image"))?;
        tracing::debug!("Alpha grid shape: {:?}", alpha.dim());

        tracing::info!("Merging color and alpha channels...");
        let output = merge_color_alpha(&color, &alpha, self.config.alpha_channel)?;

        tracing::info!("Saving output to: {}", output_path.display());
        image::save_image(&output, output_path)
    }

    /// Convert an alpha image into an RGBA cutoff map.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be loaded or the output cannot
    /// be written.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        alpha_path: P,
        output_path: Q,
    ) -> Result<()> {
        let (alpha_path, output_path) = (alpha_path.as_ref(), output_path.as_ref());

        tracing::info!("Loading alpha image: {}", alpha_path.display());
        let alpha =
            image::load_image(alpha_path).map_err(|err| err.in_stage("load alpha image"))?;
        tracing::debug!("Alpha grid shape: {:?}", alpha.dim());

        tracing::info!("Expanding alpha into cutoff map...");
        let output = expand_alpha(&alpha, self.config.alpha_channel)?;

        tracing::info!("Saving output to: {}", output_path.display());
        image::save_image(&output, output_path)
    }
}
