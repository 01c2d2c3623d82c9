//! Unified error type for the thumbnail pipeline.
//!
//! [`PipelineError`] covers invalid parameters, unsupported source layouts,
//! oversized thumbnails and failures reported by a
//! [`ScanlineSource`](crate::ScanlineSource).

use std::fmt;

/// Error type for every fallible pipeline operation.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::{PipelineError, ThumbnailPipeline};
///
/// let err = ThumbnailPipeline::new(256).gamma(0.0).validate().unwrap_err();
/// assert_eq!(err, PipelineError::InvalidGamma(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Source stores pixels in tiles; only scanline sources are supported.
    TiledLayout,
    /// Source reports a zero dimension or zero channels.
    EmptySource {
        /// Reported width
        width: usize,
        /// Reported height
        height: usize,
        /// Reported channel count
        channels: usize,
    },
    /// Requested thumbnail width is zero.
    InvalidLowresWidth,
    /// Gamma is not a finite, strictly positive number.
    InvalidGamma(f32),
    /// Percentile is not within `(0, 1]`.
    InvalidPercentile(f64),
    /// Sample count does not match `width * height * channels`.
    BufferLength {
        /// Required number of samples
        expected: usize,
        /// Number of samples supplied
        actual: usize,
    },
    /// Requested scanline lies beyond the source height.
    ScanlineOutOfRange {
        /// Requested row
        row: usize,
        /// Source height
        height: usize,
    },
    /// Requested thumbnail has more samples than a buffer can hold.
    ThumbnailTooLarge {
        /// Requested thumbnail width
        width: usize,
        /// Height implied by the source aspect ratio
        height: usize,
        /// Source channel count
        channels: usize,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::TiledLayout => {
                write!(f, "tiled images are not supported, only scanline images")
            }
            PipelineError::EmptySource {
                width,
                height,
                channels,
            } => write!(
                f,
                "source image is empty ({}x{}, {} channels)",
                width, height, channels
            ),
            PipelineError::InvalidLowresWidth => {
                write!(f, "thumbnail width must be at least 1 pixel")
            }
            PipelineError::InvalidGamma(gamma) => {
                write!(f, "gamma must be finite and positive, got {}", gamma)
            }
            PipelineError::InvalidPercentile(percentile) => {
                write!(f, "percentile must be in (0, 1], got {}", percentile)
            }
            PipelineError::BufferLength { expected, actual } => write!(
                f,
                "pixel buffer holds {} samples, expected {}",
                actual, expected
            ),
            PipelineError::ScanlineOutOfRange { row, height } => {
                write!(f, "scanline {} out of range (height {})", row, height)
            }
            PipelineError::ThumbnailTooLarge {
                width,
                height,
                channels,
            } => write!(
                f,
                "thumbnail of {}x{} with {} channels is too large",
                width, height, channels
            ),
        }
    }
}

impl std::error::Error for PipelineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tiled() {
        assert_eq!(
            PipelineError::TiledLayout.to_string(),
            "tiled images are not supported, only scanline images"
        );
    }

    #[test]
    fn test_display_empty_source() {
        let err = PipelineError::EmptySource {
            width: 0,
            height: 10,
            channels: 3,
        };
        assert_eq!(err.to_string(), "source image is empty (0x10, 3 channels)");
    }

    #[test]
    fn test_display_thumbnail_too_large() {
        let err = PipelineError::ThumbnailTooLarge {
            width: 1 << 20,
            height: 1 << 19,
            channels: 4,
        };
        assert_eq!(
            err.to_string(),
            "thumbnail of 1048576x524288 with 4 channels is too large"
        );
    }

    #[test]
    fn test_display_buffer_length() {
        let err = PipelineError::BufferLength {
            expected: 12,
            actual: 10,
        };
        assert_eq!(err.to_string(), "pixel buffer holds 10 samples, expected 12");
    }
}
