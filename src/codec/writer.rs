//! Thumbnail encoders.
//!
//! - **OpenEXR** keeps full `f32` precision, including values above 1.0
//! - **PNG** is 8-bit: samples are clamped to `[0, 1]` and rounded

use crate::error::ThumbnailError;
use smallvec::SmallVec;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thumbnail_pipeline::source::default_channel_names;
use thumbnail_pipeline::PixelBuffer;

/// Output encodings, chosen by target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Exr,
    Png,
}

impl TargetFormat {
    /// Resolve the format from the extension of `path` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ThumbnailError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("exr") => Ok(TargetFormat::Exr),
            Some("png") => Ok(TargetFormat::Png),
            Some(other) => Err(target_create(
                path,
                format!("unsupported output format '.{}' (expected .exr or .png)", other),
            )),
            None => Err(target_create(path, "missing file extension (expected .exr or .png)")),
        }
    }
}

/// Encode `buffer` to `path`.
///
/// `channel_names` label EXR channels; when they don't match the channel
/// count, conventional names are used instead. If encoding fails after the
/// target was created, the partial file is removed.
pub fn write_thumbnail(
    path: &Path,
    format: TargetFormat,
    buffer: &PixelBuffer,
    channel_names: &[String],
) -> Result<(), ThumbnailError> {
    if buffer.is_empty() {
        return Err(ThumbnailError::EmptyThumbnail {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    match format {
        TargetFormat::Exr => {
            let names = if channel_names.len() == buffer.channels() {
                channel_names.to_vec()
            } else {
                default_channel_names(buffer.channels())
            };
            write_exr(path, buffer, &names)
        }
        TargetFormat::Png => write_png(path, buffer),
    }?;

    tracing::debug!(
        path = %path.display(),
        ?format,
        width = buffer.width(),
        height = buffer.height(),
        "Wrote thumbnail"
    );
    Ok(())
}

fn write_exr(path: &Path, buffer: &PixelBuffer, names: &[String]) -> Result<(), ThumbnailError> {
    use exr::prelude::*;

    let channels = buffer.channels();
    let list: SmallVec<[AnyChannel<FlatSamples>; 4]> = names
        .iter()
        .enumerate()
        .map(|(c, name)| {
            let plane: Vec<f32> = buffer
                .samples()
                .iter()
                .skip(c)
                .step_by(channels)
                .copied()
                .collect();
            AnyChannel::new(name.as_str(), FlatSamples::F32(plane))
        })
        .collect();

    let layer = Layer::new(
        (buffer.width(), buffer.height()),
        LayerAttributes::named("thumbnail"),
        Encoding::FAST_LOSSLESS,
        AnyChannels::sort(list),
    );

    encode_to(path, |writer| Image::from_layer(layer).write().to_buffered(writer))
}

fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), ThumbnailError> {
    let color_type = match buffer.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(target_create(
                path,
                format!("PNG holds at most 4 channels, thumbnail has {}", n),
            ))
        }
    };
    let width = u32::try_from(buffer.width()).map_err(|e| target_create(path, e))?;
    let height = u32::try_from(buffer.height()).map_err(|e| target_create(path, e))?;
    let data: Vec<u8> = buffer.samples().iter().map(|&s| quantize(s)).collect();

    encode_to(path, |writer| {
        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()
    })
}

/// Create `path` and run `encode` on it, deleting the file again if
/// encoding fails.
fn encode_to<E, F>(path: &Path, encode: F) -> Result<(), ThumbnailError>
where
    E: std::fmt::Display,
    F: FnOnce(BufWriter<File>) -> Result<(), E>,
{
    let file = File::create(path).map_err(|e| target_create(path, e))?;
    encode(BufWriter::new(file)).map_err(|e| {
        if let Err(remove) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %remove, "Could not remove partial target");
        }
        write_failed(path, e)
    })
}

/// Clamp to `[0, 1]` and round to 8 bits. NaN encodes as 0.
#[inline]
fn quantize(sample: f32) -> u8 {
    (sample.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn target_create(path: &Path, reason: impl std::fmt::Display) -> ThumbnailError {
    ThumbnailError::TargetCreate {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn write_failed(path: &Path, reason: impl std::fmt::Display) -> ThumbnailError {
    ThumbnailError::Write {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
