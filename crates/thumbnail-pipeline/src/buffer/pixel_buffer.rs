//! Flat, channel-interleaved `f32` pixel storage.

use crate::api::PipelineError;

/// A row-major, channel-interleaved buffer of `f32` samples.
///
/// The length invariant `samples.len() == width * height * channels` is
/// enforced at construction and cannot be broken afterwards: the sample
/// slice is exposed mutably but never resizable.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::PixelBuffer;
///
/// let mut buffer = PixelBuffer::zeroed(2, 2, 3);
/// buffer.pixel_mut(1, 0).copy_from_slice(&[0.5, 0.25, 1.0]);
///
/// assert_eq!(buffer.pixel(1, 0), &[0.5, 0.25, 1.0]);
/// assert_eq!(buffer.samples()[3..6], [0.5, 0.25, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    samples: Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
}

/// Largest sample count a `Vec<f32>` can hold.
pub const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f32>();

impl PixelBuffer {
    /// Sample count of a `width x height x channels` buffer, or `None` if
    /// it overflows `usize` or exceeds [`MAX_SAMPLES`].
    ///
    /// ```
    /// use thumbnail_pipeline::PixelBuffer;
    ///
    /// assert_eq!(PixelBuffer::checked_len(512, 256, 3), Some(393_216));
    /// assert_eq!(PixelBuffer::checked_len(usize::MAX, 2, 1), None);
    /// ```
    pub fn checked_len(width: usize, height: usize, channels: usize) -> Option<usize> {
        width
            .checked_mul(height)?
            .checked_mul(channels)
            .filter(|&len| len <= MAX_SAMPLES)
    }

    /// Create a zero-filled buffer.
    ///
    /// # Panics
    ///
    /// Panics if the sample count is not representable; see
    /// [`checked_len`](Self::checked_len).
    pub fn zeroed(width: usize, height: usize, channels: usize) -> Self {
        Self {
            samples: vec![0.0; Self::checked_len(width, height, channels).unwrap_or_else(|| {
                panic!("{width}x{height}x{channels} buffer is too large")
            })],
            width,
            height,
            channels,
        }
    }

    /// Wrap existing samples, checking the length invariant.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::BufferLength`] if `samples.len()` is not
    /// `width * height * channels`.
    pub fn from_samples(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<f32>,
    ) -> Result<Self, PipelineError> {
        match Self::checked_len(width, height, channels) {
            Some(expected) if expected == samples.len() => {}
            expected => {
                return Err(PipelineError::BufferLength {
                    expected: expected.unwrap_or(usize::MAX),
                    actual: samples.len(),
                })
            }
        }
        Ok(Self {
            samples,
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True if the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Samples of row `y` (`width * channels` values).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[f32] {
        let row_len = self.width * self.channels;
        &self.samples[y * row_len..(y + 1) * row_len]
    }

    /// All channel samples of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[f32] {
        let start = self.offset(x, y);
        &self.samples[start..start + self.channels]
    }

    /// Mutable channel samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [f32] {
        let start = self.offset(x, y);
        &mut self.samples[start..start + self.channels]
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (y * self.width + x) * self.channels
    }
}
