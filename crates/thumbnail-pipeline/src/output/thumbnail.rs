//! Thumbnail result type.

use crate::buffer::PixelBuffer;
use crate::tone::NormalizeOutcome;

/// A finished thumbnail: tone-mapped samples plus how they were normalized.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::{MemorySource, PixelBuffer, ThumbnailPipeline};
///
/// let mut source = MemorySource::new(PixelBuffer::zeroed(8, 8, 1));
/// let thumb = ThumbnailPipeline::new(4).run(&mut source).unwrap();
///
/// assert_eq!(thumb.width(), 4);
/// assert_eq!(thumb.height(), 4);
/// assert!(thumb.normalization.scale().is_none()); // all-zero input
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// Tone-mapped samples, `[height][width][channels]`.
    pub buffer: PixelBuffer,
    /// Result of the normalization stage.
    pub normalization: NormalizeOutcome,
}

impl Thumbnail {
    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.buffer.channels()
    }

    /// Samples in row-major, channel-interleaved order.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        self.buffer.samples()
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}
