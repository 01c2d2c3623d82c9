use crate::error::ThumbnailError;
use serde::Deserialize;
use std::path::Path;
use thumbnail_pipeline::tone::{DEFAULT_GAMMA, DEFAULT_PERCENTILE};
use thumbnail_pipeline::{ThumbnailPipeline, ToneOptions};

/// Default thumbnail width in pixels.
pub const DEFAULT_LOWRES_WIDTH: usize = 512;

/// Thumbnail settings, loaded from an optional YAML file and overridden by
/// command line flags.
///
/// ```yaml
/// lowres_width: 256
/// gamma: 2.2
/// percentile: 0.995
/// normalize: true
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThumbnailConfig {
    /// Thumbnail width in pixels
    #[serde(default = "default_lowres_width")]
    pub lowres_width: usize,

    /// Gamma exponent base (samples become `s^(1/gamma)`)
    #[serde(default = "default_gamma")]
    pub gamma: f32,

    /// Percentile mapped to 1.0 by exposure normalization
    #[serde(default = "default_percentile")]
    pub percentile: f64,

    /// Run percentile normalization before gamma
    #[serde(default = "default_normalize")]
    pub normalize: bool,
}

fn default_lowres_width() -> usize {
    DEFAULT_LOWRES_WIDTH
}

fn default_gamma() -> f32 {
    DEFAULT_GAMMA
}

fn default_percentile() -> f64 {
    DEFAULT_PERCENTILE
}

fn default_normalize() -> bool {
    true
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            lowres_width: default_lowres_width(),
            gamma: default_gamma(),
            percentile: default_percentile(),
            normalize: default_normalize(),
        }
    }
}

impl ThumbnailConfig {
    /// Load configuration from a YAML file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self, ThumbnailError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ThumbnailError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&content)
            .map_err(|e| ThumbnailError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(
            path = %path.display(),
            lowres_width = config.lowres_width,
            gamma = config.gamma,
            percentile = config.percentile,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Tone options for the processing pipeline.
    pub fn tone_options(&self) -> ToneOptions {
        ToneOptions::new()
            .gamma(self.gamma)
            .percentile(self.percentile)
            .normalize(self.normalize)
    }

    /// Build the processing pipeline described by this configuration.
    pub fn pipeline(&self) -> ThumbnailPipeline {
        ThumbnailPipeline::new(self.lowres_width).options(self.tone_options())
    }

    /// Reject unusable settings before any file is touched.
    pub fn validate(&self) -> Result<(), ThumbnailError> {
        self.pipeline()
            .validate()
            .map_err(|e| ThumbnailError::Config(e.to_string()))
    }
}
