//! Tone mapping options and configuration.
//!
//! This module provides the [`ToneOptions`] struct for configuring the
//! normalization and gamma stages.

use crate::api::PipelineError;

/// Default display gamma. The single canonical default used by both the
/// library and the command line.
pub const DEFAULT_GAMMA: f32 = 1.8;

/// Default normalization percentile: the value exceeded by the brightest 1%
/// of samples maps to 1.0.
pub const DEFAULT_PERCENTILE: f64 = 0.99;

/// Configuration for the tone stages applied after resampling.
///
/// # Defaults
///
/// - Gamma: 1.8
/// - Percentile: 0.99
/// - Normalize: enabled
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::ToneOptions;
///
/// let options = ToneOptions::new().gamma(2.2).percentile(0.995);
/// assert!(options.validate().is_ok());
///
/// let invalid = ToneOptions::new().gamma(-1.0);
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToneOptions {
    /// Gamma exponent base; samples become `sample^(1/gamma)`.
    ///
    /// - 1.0 = linear, no change
    /// - 1.8 = default
    /// - 2.2 = typical sRGB-like display response
    pub gamma: f32,

    /// Percentile mapped to 1.0 by normalization, in `(0, 1]`.
    ///
    /// The scale factor is the sample at index
    /// `floor((1 - percentile) * count)` of the descending-sorted samples.
    pub percentile: f64,

    /// Whether to run percentile normalization at all.
    pub normalize: bool,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            percentile: DEFAULT_PERCENTILE,
            normalize: true,
        }
    }
}

impl ToneOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gamma exponent base.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the normalization percentile.
    #[inline]
    pub fn percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    /// Enable or disable normalization.
    #[inline]
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.normalize = enabled;
        self
    }

    /// Check that gamma and percentile are usable.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::InvalidGamma`] unless gamma is finite and > 0
    /// - [`PipelineError::InvalidPercentile`] unless `0 < percentile <= 1`
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(PipelineError::InvalidGamma(self.gamma));
        }
        if !(self.percentile > 0.0 && self.percentile <= 1.0) {
            return Err(PipelineError::InvalidPercentile(self.percentile));
        }
        Ok(())
    }
}
