//! Custom error types for texalpha.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the texalpha library.
#[derive(Error, Debug)]
pub enum Error {
    /// An input path does not exist or cannot be opened.
    #[error("input not found {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input exists but could not be decoded as an image.
    #[error("failed to decode image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Two grids taking part in one composition have different sizes.
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        .expected.1, .expected.0, .actual.1, .actual.0
    )]
    DimensionMismatch {
        /// `(height, width)` of the reference grid.
        expected: (usize, usize),
        /// `(height, width)` of the offending grid.
        actual: (usize, usize),
    },

    /// A grid has a channel count the operation cannot handle.
    #[error("unsupported channel count {channels}")]
    UnsupportedChannels { channels: usize },

    /// The output extension has no encoder or cannot carry an alpha channel.
    #[error("unsupported output format for {path}: {reason}")]
    UnsupportedOutputFormat { path: PathBuf, reason: String },

    /// Failed to encode an image.
    #[error("failed to encode image for {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to persist encoded bytes.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image dimensions are not supported.
    #[error("unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: usize,
        height: usize,
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A pipeline stage failed; `stage` names which input or step.
    #[error("failed to {stage}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap `self` with the pipeline stage it happened in.
    #[must_use]
    pub fn in_stage(self, stage: &'static str) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error below any stage labels.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for texalpha operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_reports_width_first() {
        let err = Error::DimensionMismatch {
            expected: (2, 3),
            actual: (4, 5),
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3x2, got 5x4");
    }

    #[test]
    fn source_is_not_repeated_in_display() {
        let err = Error::InputNotFound {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "input not found missing.png");
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "gone");
    }

    #[test]
    fn stage_wraps_and_unwraps() {
        let err = Error::UnsupportedChannels { channels: 2 }.in_stage("load color image");
        assert_eq!(err.to_string(), "failed to load color image");
        assert!(matches!(
            err.root_cause(),
            Error::UnsupportedChannels { channels: 2 }
        ));
    }

    #[test]
    fn messages_name_the_path() {
        let err = Error::UnsupportedOutputFormat {
            path: PathBuf::from("out.jpg"),
            reason: "no alpha channel".to_string(),
        };
        assert!(err.to_string().contains("out.jpg"));
    }
}
