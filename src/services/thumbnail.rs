use crate::codec::{self, TargetFormat};
use crate::error::ThumbnailError;
use crate::models::ThumbnailConfig;
use std::path::Path;
use thumbnail_pipeline::{ImageGeometry, NormalizeOutcome, PipelineError, ScanlineSource, Thumbnail};

/// Summary of a completed thumbnail run.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailReport {
    /// Geometry of the full-resolution source
    pub source: ImageGeometry,
    /// Thumbnail width in pixels
    pub width: usize,
    /// Thumbnail height in pixels
    pub height: usize,
    /// Samples per pixel (same as the source)
    pub channels: usize,
    /// What exposure normalization did
    pub normalization: NormalizeOutcome,
    /// Encoding written to the target
    pub format: TargetFormat,
}

/// Generate a tone-mapped thumbnail of `source_path` at `target_path`.
///
/// Steps, each aborting on the first failure:
/// 1. Validate configuration
/// 2. Resolve the target format from its extension
/// 3. Open the source (tiled files are rejected here)
/// 4. Resample, normalize, apply gamma
/// 5. Encode the target
///
/// The source is released when this function returns, on every path.
pub fn generate_thumbnail(
    source_path: &Path,
    target_path: &Path,
    config: &ThumbnailConfig,
) -> Result<ThumbnailReport, ThumbnailError> {
    config.validate()?;
    let format = TargetFormat::from_path(target_path)?;

    let mut source = codec::open_source(source_path)?;
    let thumbnail = render(&mut source, source_path, config)?;

    if thumbnail.buffer.is_empty() {
        return Err(ThumbnailError::EmptyThumbnail {
            width: thumbnail.width(),
            height: thumbnail.height(),
        });
    }

    codec::write_thumbnail(
        target_path,
        format,
        &thumbnail.buffer,
        &source.channel_names(),
    )?;

    let report = ThumbnailReport {
        source: source.geometry(),
        width: thumbnail.width(),
        height: thumbnail.height(),
        channels: thumbnail.channels(),
        normalization: thumbnail.normalization,
        format,
    };

    tracing::info!(
        source = %source_path.display(),
        target = %target_path.display(),
        width = report.width,
        height = report.height,
        "Thumbnail written"
    );
    Ok(report)
}

/// Run the processing pipeline over an open source.
pub fn render<S: ScanlineSource + ?Sized>(
    source: &mut S,
    source_path: &Path,
    config: &ThumbnailConfig,
) -> Result<Thumbnail, ThumbnailError> {
    let geometry = source.geometry();
    if geometry.tiled {
        return Err(ThumbnailError::UnsupportedLayout {
            path: source_path.to_path_buf(),
        });
    }

    tracing::info!(
        path = %source_path.display(),
        width = geometry.width,
        height = geometry.height,
        channels = geometry.channels,
        "Source is scanline"
    );

    let thumbnail = config.pipeline().run(source).map_err(|e| match e {
        PipelineError::TiledLayout => ThumbnailError::UnsupportedLayout {
            path: source_path.to_path_buf(),
        },
        other => ThumbnailError::Pipeline(other),
    })?;

    match thumbnail.normalization {
        NormalizeOutcome::Scaled { scale } => {
            tracing::debug!(scale, percentile = config.percentile, "Normalized exposure")
        }
        NormalizeOutcome::SkippedEmpty => {
            tracing::warn!("Thumbnail has no samples, normalization skipped")
        }
        NormalizeOutcome::SkippedDegenerateScale { scale } => tracing::warn!(
            scale,
            "Percentile sample is not a positive number, normalization skipped"
        ),
        NormalizeOutcome::Disabled => tracing::debug!("Normalization disabled"),
    }
    tracing::debug!(gamma = config.gamma, "Applied gamma");

    Ok(thumbnail)
}
