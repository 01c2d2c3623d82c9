//! ThumbnailPipeline builder -- the primary entry point for the crate.
//!
//! [`ThumbnailPipeline`] chains resampling, normalization and gamma behind a
//! fluent configuration API.

use crate::api::PipelineError;
use crate::output::Thumbnail;
use crate::resample::resample_nearest;
use crate::source::ScanlineSource;
use crate::tone::{apply_gamma, normalize, NormalizeOutcome, ToneOptions};

/// High-level thumbnail builder.
///
/// # Design
///
/// - Constructor requires the thumbnail width; height follows the source
///   aspect ratio
/// - Configuration methods consume and return `self`
/// - [`run()`](Self::run) takes `&self`, so one pipeline can process many
///   sources
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::{MemorySource, PixelBuffer, ThumbnailPipeline};
///
/// let samples = vec![0.5f32; 64 * 32 * 3];
/// let mut source = MemorySource::new(PixelBuffer::from_samples(64, 32, 3, samples).unwrap());
///
/// let pipeline = ThumbnailPipeline::new(16).gamma(2.2);
/// let thumb = pipeline.run(&mut source).unwrap();
///
/// assert_eq!((thumb.width(), thumb.height(), thumb.channels()), (16, 8, 3));
/// // Uniform input normalizes to exactly 1.0, and 1.0 is a gamma fixpoint.
/// assert!(thumb.samples().iter().all(|&s| s == 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct ThumbnailPipeline {
    lowres_width: usize,
    tone: ToneOptions,
}

impl ThumbnailPipeline {
    /// Create a pipeline producing thumbnails `lowres_width` pixels wide,
    /// with default [`ToneOptions`].
    pub fn new(lowres_width: usize) -> Self {
        Self {
            lowres_width,
            tone: ToneOptions::default(),
        }
    }

    /// Set the gamma exponent base.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.tone = self.tone.gamma(gamma);
        self
    }

    /// Set the normalization percentile.
    #[inline]
    pub fn percentile(mut self, percentile: f64) -> Self {
        self.tone = self.tone.percentile(percentile);
        self
    }

    /// Enable or disable percentile normalization.
    #[inline]
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.tone = self.tone.normalize(enabled);
        self
    }

    /// Replace all tone options at once.
    #[inline]
    pub fn options(mut self, tone: ToneOptions) -> Self {
        self.tone = tone;
        self
    }

    #[inline]
    pub fn lowres_width(&self) -> usize {
        self.lowres_width
    }

    #[inline]
    pub fn tone_options(&self) -> &ToneOptions {
        &self.tone
    }

    /// Check parameters without touching a source.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.lowres_width == 0 {
            return Err(PipelineError::InvalidLowresWidth);
        }
        self.tone.validate()
    }

    /// Produce a thumbnail from `source`.
    ///
    /// Applies the full pipeline:
    /// 1. Validate parameters
    /// 2. Resample (nearest-neighbor, rejects tiled sources)
    /// 3. Normalize in place (unless disabled)
    /// 4. Gamma in place
    pub fn run<S: ScanlineSource + ?Sized>(&self, source: &mut S) -> Result<Thumbnail, PipelineError> {
        self.validate()?;

        let mut buffer = resample_nearest(source, self.lowres_width)?;

        let normalization = if self.tone.normalize {
            normalize(buffer.samples_mut(), self.tone.percentile)
        } else {
            NormalizeOutcome::Disabled
        };

        apply_gamma(buffer.samples_mut(), self.tone.gamma);

        Ok(Thumbnail {
            buffer,
            normalization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::source::MemorySource;

    fn gradient_source(width: usize, height: usize) -> MemorySource {
        let samples = (0..width * height).map(|i| (i + 1) as f32).collect();
        MemorySource::new(PixelBuffer::from_samples(width, height, 1, samples).unwrap())
    }

    #[test]
    fn test_new_defaults() {
        let pipeline = ThumbnailPipeline::new(512);
        assert_eq!(pipeline.lowres_width(), 512);
        assert_eq!(pipeline.tone_options(), &ToneOptions::default());
    }

    #[test]
    fn test_builder_chaining() {
        let pipeline = ThumbnailPipeline::new(64)
            .gamma(2.2)
            .percentile(0.95)
            .normalize(false);
        assert!((pipeline.tone_options().gamma - 2.2).abs() < f32::EPSILON);
        assert!((pipeline.tone_options().percentile - 0.95).abs() < f64::EPSILON);
        assert!(!pipeline.tone_options().normalize);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert_eq!(
            ThumbnailPipeline::new(0).validate(),
            Err(PipelineError::InvalidLowresWidth)
        );
        assert_eq!(
            ThumbnailPipeline::new(8).gamma(0.0).validate(),
            Err(PipelineError::InvalidGamma(0.0))
        );
    }

    #[test]
    fn test_invalid_gamma_reads_nothing() {
        let mut source = gradient_source(8, 8);
        assert!(ThumbnailPipeline::new(4).gamma(-1.0).run(&mut source).is_err());
        assert_eq!(source.reads(), 0);
    }

    #[test]
    fn test_run_reports_scale() {
        let mut source = gradient_source(10, 10);
        let thumb = ThumbnailPipeline::new(10).run(&mut source).unwrap();
        // 100 samples 1..=100, index 1 of the descending order.
        assert_eq!(thumb.normalization, NormalizeOutcome::Scaled { scale: 99.0 });
    }

    #[test]
    fn test_run_without_normalization() {
        let mut source = gradient_source(4, 4);
        let thumb = ThumbnailPipeline::new(4)
            .normalize(false)
            .gamma(1.0)
            .run(&mut source)
            .unwrap();
        assert_eq!(thumb.normalization, NormalizeOutcome::Disabled);
        assert_eq!(thumb.samples(), source.buffer().samples());
    }

    #[test]
    fn test_pipeline_is_reusable() {
        let pipeline = ThumbnailPipeline::new(5);
        let first = pipeline.run(&mut gradient_source(20, 20)).unwrap();
        let second = pipeline.run(&mut gradient_source(20, 20)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_through_boxed_source() {
        let mut source: Box<dyn ScanlineSource> = Box::new(gradient_source(6, 3));
        let thumb = ThumbnailPipeline::new(3).run(&mut source).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (3, 1));
    }
}
