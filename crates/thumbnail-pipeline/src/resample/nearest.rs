//! Nearest-neighbor index mapping and the resampling loop.

use crate::api::PipelineError;
use crate::buffer::PixelBuffer;
use crate::source::ScanlineSource;

/// Thumbnail height preserving the source aspect ratio.
///
/// Truncates: `floor(source_height * lowres_width / source_width)`, computed
/// in exact integer arithmetic so results never depend on float rounding
/// of the aspect ratio. Returns 0 when the thumbnail would be less than one
/// row tall, or when `source_width` is 0. Saturates at `usize::MAX` when the
/// exact height does not fit.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::lowres_height;
///
/// assert_eq!(lowres_height(1024, 512, 256), 128);
/// assert_eq!(lowres_height(1000, 333, 512), 170); // 170.496 truncated
/// assert_eq!(lowres_height(4096, 1, 512), 0);
/// assert_eq!(lowres_height(1, 2, usize::MAX), usize::MAX);
/// ```
pub fn lowres_height(source_width: usize, source_height: usize, lowres_width: usize) -> usize {
    if source_width == 0 {
        return 0;
    }
    let height = source_height as u128 * lowres_width as u128 / source_width as u128;
    usize::try_from(height).unwrap_or(usize::MAX)
}

/// Source coordinate sampled by destination coordinate `dst`.
///
/// `round(dst / dst_len * src_len)`, rounding half away from zero, then
/// clamped to `src_len - 1`. The clamp only matters when upscaling, where
/// the last destination sample can round up to `src_len`.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::source_index;
///
/// assert_eq!(source_index(0, 256, 1024), 0);
/// assert_eq!(source_index(1, 256, 1024), 4);
/// assert_eq!(source_index(1, 4, 2), 1);  // 0.5 rounds up
/// assert_eq!(source_index(3, 4, 2), 1);  // 1.5 -> 2, clamped
/// ```
#[inline]
pub fn source_index(dst: usize, dst_len: usize, src_len: usize) -> usize {
    debug_assert!(dst_len > 0 && src_len > 0);
    let mapped = (dst as f64 / dst_len as f64 * src_len as f64).round() as usize;
    mapped.min(src_len - 1)
}

/// Downsample `source` to `lowres_width` pixels wide by nearest-neighbor
/// selection.
///
/// The output has shape `[lowres_height][lowres_width][channels]` where
/// `lowres_height` comes from [`lowres_height()`]. A zero output height
/// yields an empty buffer without reading any scanline.
///
/// # Errors
///
/// - [`PipelineError::TiledLayout`] if the source reports tiled storage
///   (checked before anything is read)
/// - [`PipelineError::EmptySource`] if the source has a zero dimension
/// - [`PipelineError::InvalidLowresWidth`] if `lowres_width` is 0
/// - [`PipelineError::ThumbnailTooLarge`] if the thumbnail sample count
///   overflows (checked before allocating)
/// - any error returned by [`ScanlineSource::read_scanline`]
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::{resample_nearest, MemorySource, PixelBuffer};
///
/// let samples: Vec<f32> = (0..16).map(|i| i as f32).collect();
/// let mut source = MemorySource::new(PixelBuffer::from_samples(4, 4, 1, samples).unwrap());
///
/// let thumb = resample_nearest(&mut source, 2).unwrap();
/// assert_eq!((thumb.width(), thumb.height()), (2, 2));
/// assert_eq!(thumb.samples(), &[0.0, 2.0, 8.0, 10.0]);
/// ```
pub fn resample_nearest<S: ScanlineSource + ?Sized>(
    source: &mut S,
    lowres_width: usize,
) -> Result<PixelBuffer, PipelineError> {
    let geometry = source.geometry();
    if geometry.tiled {
        return Err(PipelineError::TiledLayout);
    }
    if geometry.is_empty() {
        return Err(PipelineError::EmptySource {
            width: geometry.width,
            height: geometry.height,
            channels: geometry.channels,
        });
    }
    if lowres_width == 0 {
        return Err(PipelineError::InvalidLowresWidth);
    }

    let channels = geometry.channels;
    let height = lowres_height(geometry.width, geometry.height, lowres_width);
    if PixelBuffer::checked_len(lowres_width, height, channels).is_none() {
        return Err(PipelineError::ThumbnailTooLarge {
            width: lowres_width,
            height,
            channels,
        });
    }
    let mut thumb = PixelBuffer::zeroed(lowres_width, height, channels);
    if height == 0 {
        return Ok(thumb);
    }

    // Sample offset of each destination column within a source scanline.
    let column_offsets: Vec<usize> = (0..lowres_width)
        .map(|x| source_index(x, lowres_width, geometry.width) * channels)
        .collect();

    let mut scanline = vec![0.0f32; geometry.row_len()];
    let mut loaded_row = None;
    let dst_row_len = lowres_width * channels;

    for (y, dst_row) in thumb
        .samples_mut()
        .chunks_exact_mut(dst_row_len)
        .enumerate()
    {
        let src_row = source_index(y, height, geometry.height);
        if loaded_row != Some(src_row) {
            source.read_scanline(src_row, &mut scanline)?;
            loaded_row = Some(src_row);
        }

        for (dst_pixel, &offset) in dst_row.chunks_exact_mut(channels).zip(&column_offsets) {
            dst_pixel.copy_from_slice(&scanline[offset..offset + channels]);
        }
    }

    Ok(thumb)
}
