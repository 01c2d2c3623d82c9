//! Synthetic source images written with the `exr` and `png` crates.

use smallvec::SmallVec;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Interleaved RGB samples: all `base`, with `(x, y)` set to `bright`.
pub fn rgb_with_bright_pixel(
    width: usize,
    height: usize,
    base: f32,
    bright: (usize, usize, f32),
) -> Vec<f32> {
    let mut samples = vec![base; width * height * 3];
    let (x, y, value) = bright;
    let offset = (y * width + x) * 3;
    samples[offset..offset + 3].copy_from_slice(&[value, value, value]);
    samples
}

/// Interleaved samples where each encodes its position:
/// `y * 10_000 + x * 10 + channel`.
pub fn coded_samples(width: usize, height: usize, channels: usize) -> Vec<f32> {
    let mut samples = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                samples.push((y * 10_000 + x * 10 + c) as f32);
            }
        }
    }
    samples
}

/// Write an OpenEXR file with one `f32` channel per name.
///
/// `samples` are interleaved in the order of `names`.
pub fn write_exr(
    path: &Path,
    width: usize,
    height: usize,
    names: &[&str],
    samples: &[f32],
    tiled: bool,
) {
    use exr::image::Blocks;
    use exr::prelude::*;

    let channels = names.len();
    assert_eq!(samples.len(), width * height * channels);

    let list: SmallVec<[AnyChannel<FlatSamples>; 4]> = names
        .iter()
        .enumerate()
        .map(|(c, name)| {
            let plane = samples.iter().skip(c).step_by(channels).copied().collect();
            AnyChannel::new(*name, FlatSamples::F32(plane))
        })
        .collect();

    let encoding = if tiled {
        Encoding {
            blocks: Blocks::Tiles(Vec2(16, 16)),
            ..Encoding::UNCOMPRESSED
        }
    } else {
        Encoding::UNCOMPRESSED
    };

    let layer = Layer::new(
        (width, height),
        LayerAttributes::named("fixture"),
        encoding,
        AnyChannels::sort(list),
    );
    Image::from_layer(layer)
        .write()
        .to_file(path)
        .expect("write fixture exr");
}

/// Write an RGB OpenEXR scanline file.
pub fn write_rgb_exr(path: &Path, width: usize, height: usize, samples: &[f32]) {
    write_exr(path, width, height, &["R", "G", "B"], samples, false);
}

/// Write an 8-bit PNG.
pub fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) {
    let file = File::create(path).expect("create fixture png");
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(data).expect("png data");
    writer.finish().expect("png finish");
}

/// Scratch directory plus helpers for paths inside it.
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
