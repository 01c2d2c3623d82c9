//! PNG source, decoded fully into memory.

use super::source_open;
use crate::error::ThumbnailError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thumbnail_pipeline::{MemorySource, PixelBuffer};

/// Decode a PNG into a [`MemorySource`].
///
/// Palette and sub-byte images are expanded to 8 bits per sample. 8-bit
/// samples map to `v / 255`, 16-bit samples to `v / 65535`. PNG is always
/// stored as scanlines.
pub fn open_png(path: &Path) -> Result<MemorySource, ThumbnailError> {
    let file = File::open(path).map_err(|e| source_open(path, e))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder.read_info().map_err(|e| source_open(path, e))?;
    let mut raw = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut raw).map_err(|e| source_open(path, e))?;

    let width = info.width as usize;
    let height = info.height as usize;
    let channels = info.color_type.samples();
    let samples = decode_samples(&raw[..info.buffer_size()], info.bit_depth, info.line_size, width * channels);

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        channels,
        bit_depth = ?info.bit_depth,
        "Decoded PNG"
    );

    let buffer =
        PixelBuffer::from_samples(width, height, channels, samples).map_err(|e| source_open(path, e))?;
    Ok(MemorySource::new(buffer))
}

/// Convert expanded PNG rows to normalized `f32` samples.
fn decode_samples(
    data: &[u8],
    bit_depth: png::BitDepth,
    line_size: usize,
    samples_per_row: usize,
) -> Vec<f32> {
    let mut samples = Vec::with_capacity(data.len());
    for line in data.chunks(line_size) {
        match bit_depth {
            png::BitDepth::Sixteen => samples.extend(
                line.chunks_exact(2)
                    .take(samples_per_row)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]) as f32 / 65535.0),
            ),
            _ => samples.extend(
                line.iter()
                    .take(samples_per_row)
                    .map(|&byte| byte as f32 / 255.0),
            ),
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_eight_bit() {
        let samples = decode_samples(&[0, 51, 255, 0, 0, 255], png::BitDepth::Eight, 3, 3);
        assert_eq!(samples, vec![0.0, 0.2, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_decode_sixteen_bit() {
        let samples = decode_samples(&[0xff, 0xff, 0x00, 0x00], png::BitDepth::Sixteen, 4, 2);
        assert_eq!(samples, vec![1.0, 0.0]);
    }

    #[test]
    fn test_decode_ignores_row_padding() {
        // Two rows of one sample each, padded to two bytes.
        let samples = decode_samples(&[255, 9, 0, 9], png::BitDepth::Eight, 2, 1);
        assert_eq!(samples, vec![1.0, 0.0]);
    }
}
