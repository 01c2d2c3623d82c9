//! OpenEXR scanline source.

use super::source_open;
use crate::error::ThumbnailError;
use exr::meta::header::Header;
use exr::meta::{BlockDescription, MetaData};
use std::path::Path;
use thumbnail_pipeline::{ImageGeometry, PipelineError, ScanlineSource};

/// Channels decoded from the first valid layer of an OpenEXR file.
///
/// Samples of every channel are converted to `f32` and kept planar; rows
/// are interleaved on demand in [`read_scanline`](ScanlineSource::read_scanline).
/// Channels are ordered R, G, B, A first (matching on the last `.`-separated
/// name segment), then the remaining channels in file order.
#[derive(Debug)]
pub struct ExrSource {
    width: usize,
    height: usize,
    names: Vec<String>,
    planes: Vec<Vec<f32>>,
}

impl ExrSource {
    /// Open an OpenEXR file.
    ///
    /// The header is inspected first: a tiled file fails with
    /// [`ThumbnailError::UnsupportedLayout`] without decoding any pixels.
    pub fn open(path: &Path) -> Result<Self, ThumbnailError> {
        let meta = MetaData::read_from_file(path, false).map_err(|e| source_open(path, e))?;
        let header = decoded_header(&meta.headers)
            .ok_or_else(|| source_open(path, "file contains no flat layers"))?;

        if matches!(header.blocks, BlockDescription::Tiles(_)) {
            return Err(ThumbnailError::UnsupportedLayout {
                path: path.to_path_buf(),
            });
        }

        let image = decode_first_layer(path).map_err(|e| source_open(path, e))?;
        let layer = image.layer_data;
        let (width, height) = (layer.size.width(), layer.size.height());

        let mut channels: Vec<(String, Vec<f32>)> = layer
            .channel_data
            .list
            .iter()
            .map(|channel| {
                (
                    channel.name.to_string(),
                    channel.sample_data.values_as_f32().collect(),
                )
            })
            .collect();

        if let Some((name, samples)) = channels
            .iter()
            .find(|(_, samples)| samples.len() != width * height)
        {
            return Err(source_open(
                path,
                format!(
                    "channel {} is subsampled ({} samples for {}x{})",
                    name,
                    samples.len(),
                    width,
                    height
                ),
            ));
        }

        channels.sort_by_key(|(name, _)| channel_rank(name));
        let (names, planes): (Vec<String>, Vec<Vec<f32>>) = channels.into_iter().unzip();

        tracing::debug!(
            path = %path.display(),
            width,
            height,
            channels = ?names,
            "Decoded OpenEXR layer"
        );

        Ok(Self {
            width,
            height,
            names,
            planes,
        })
    }
}

/// Header of the layer [`decode_first_layer`] picks: with every channel
/// requested, the first valid layer is the first one without deep data.
fn decoded_header(headers: &[Header]) -> Option<&Header> {
    headers.iter().find(|header| !header.deep)
}

/// Decode all channels of the first valid layer at full resolution.
fn decode_first_layer(
    path: &Path,
) -> exr::error::Result<exr::image::Image<exr::image::Layer<exr::image::AnyChannels<exr::image::FlatSamples>>>>
{
    use exr::prelude::*;

    read()
        .no_deep_data()
        .largest_resolution_level()
        .all_channels()
        .first_valid_layer()
        .all_attributes()
        .from_file(path)
}

/// Sort key putting color channels first in display order.
fn channel_rank(name: &str) -> u8 {
    let short = name.rsplit('.').next().unwrap_or(name);
    match short {
        "R" => 0,
        "G" => 1,
        "B" => 2,
        "A" => 3,
        _ => 4,
    }
}

impl ScanlineSource for ExrSource {
    fn geometry(&self) -> ImageGeometry {
        ImageGeometry::scanline(self.width, self.height, self.planes.len())
    }

    fn channel_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn read_scanline(&mut self, row: usize, out: &mut [f32]) -> Result<(), PipelineError> {
        if row >= self.height {
            return Err(PipelineError::ScanlineOutOfRange {
                row,
                height: self.height,
            });
        }
        let channels = self.planes.len();
        if out.len() != self.width * channels {
            return Err(PipelineError::BufferLength {
                expected: self.width * channels,
                actual: out.len(),
            });
        }

        let start = row * self.width;
        for (c, plane) in self.planes.iter().enumerate() {
            let line = &plane[start..start + self.width];
            for (pixel, &sample) in out.chunks_exact_mut(channels).zip(line) {
                pixel[c] = sample;
            }
        }
        Ok(())
    }
}
