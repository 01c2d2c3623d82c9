//! Readers and assertions for thumbnails written by the CLI and services.

use std::fs::File;
use std::path::Path;

/// A decoded 8-bit PNG.
#[derive(Debug)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub data: Vec<u8>,
}

/// Decode a PNG written by the thumbnailer.
pub fn read_png(path: &Path) -> DecodedPng {
    let decoder = png::Decoder::new(File::open(path).expect("open png"));
    let mut reader = decoder.read_info().expect("png info");
    let mut data = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("png frame");
    data.truncate(info.buffer_size());
    DecodedPng {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        data,
    }
}

/// A decoded single-layer EXR with its channels as `f32` planes.
#[derive(Debug)]
pub struct DecodedExr {
    pub width: usize,
    pub height: usize,
    pub channels: Vec<(String, Vec<f32>)>,
}

impl DecodedExr {
    pub fn channel(&self, name: &str) -> &[f32] {
        self.channels
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, plane)| plane.as_slice())
            .unwrap_or_else(|| panic!("channel {name} missing"))
    }
}

/// Decode the first layer of an EXR written by the thumbnailer.
pub fn read_exr(path: &Path) -> DecodedExr {
    use exr::prelude::*;

    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .all_channels()
        .first_valid_layer()
        .all_attributes()
        .from_file(path)
        .expect("read exr");

    let layer = image.layer_data;
    DecodedExr {
        width: layer.size.width(),
        height: layer.size.height(),
        channels: layer
            .channel_data
            .list
            .iter()
            .map(|channel| {
                (
                    channel.name.to_string(),
                    channel.sample_data.values_as_f32().collect(),
                )
            })
            .collect(),
    }
}

/// Assert the PNG at `path` has the given dimensions and color type.
pub fn assert_png_shape(path: &Path, width: u32, height: u32, color_type: png::ColorType) {
    let png = read_png(path);
    assert_eq!(
        (png.width, png.height, png.color_type),
        (width, height, color_type),
        "unexpected PNG shape for {}",
        path.display()
    );
}

/// Assert two floats are equal within `tolerance`.
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
