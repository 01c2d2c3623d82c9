//! Image geometry as reported by a source.

/// Dimensions, channel count and storage layout of an image.
///
/// `tiled` is informational: tiled sources are never resampled, the
/// pipeline rejects them with [`PipelineError::TiledLayout`](crate::PipelineError::TiledLayout).
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::ImageGeometry;
///
/// let geometry = ImageGeometry::scanline(1024, 512, 3);
/// assert_eq!(geometry.row_len(), 1024 * 3);
/// assert_eq!(geometry.sample_count(), 1024 * 512 * 3);
/// assert!(!geometry.tiled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGeometry {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Samples per pixel.
    pub channels: usize,
    /// Whether the source stores pixels in tiles instead of scanlines.
    pub tiled: bool,
}

impl ImageGeometry {
    /// Create a geometry with an explicit layout flag.
    #[inline]
    pub fn new(width: usize, height: usize, channels: usize, tiled: bool) -> Self {
        Self {
            width,
            height,
            channels,
            tiled,
        }
    }

    /// Create a scanline (non-tiled) geometry.
    #[inline]
    pub fn scanline(width: usize, height: usize, channels: usize) -> Self {
        Self::new(width, height, channels, false)
    }

    /// Number of samples in one scanline (`width * channels`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    /// Total number of samples in the image.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.width * self.height * self.channels
    }

    /// True if any dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.channels == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanline_is_not_tiled() {
        let geometry = ImageGeometry::scanline(4, 2, 3);
        assert!(!geometry.tiled);
        assert_eq!(geometry, ImageGeometry::new(4, 2, 3, false));
    }

    #[test]
    fn test_sample_counts() {
        let geometry = ImageGeometry::scanline(4, 2, 3);
        assert_eq!(geometry.row_len(), 12);
        assert_eq!(geometry.sample_count(), 24);
    }

    #[test]
    fn test_is_empty() {
        assert!(ImageGeometry::scanline(0, 2, 3).is_empty());
        assert!(ImageGeometry::scanline(4, 0, 3).is_empty());
        assert!(ImageGeometry::scanline(4, 2, 0).is_empty());
        assert!(!ImageGeometry::scanline(1, 1, 1).is_empty());
    }
}
