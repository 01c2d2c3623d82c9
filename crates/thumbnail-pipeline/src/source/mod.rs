//! Scanline sources feeding the resampler.
//!
//! The pipeline never decodes files itself. Anything that can report an
//! [`ImageGeometry`] and fill one row of `f32` samples on request implements
//! [`ScanlineSource`]; file codecs live in the application crate.

mod memory;

pub use memory::MemorySource;

use crate::api::PipelineError;
use crate::buffer::ImageGeometry;

/// A row-addressable image.
///
/// Rows are requested in increasing order by the resampler, but a source
/// must not rely on every row being requested: decimation skips rows.
pub trait ScanlineSource {
    /// Geometry of the full-resolution image.
    fn geometry(&self) -> ImageGeometry;

    /// Channel names in sample order (e.g. `["R", "G", "B"]`).
    ///
    /// Writers use these to label output channels. The default derives
    /// conventional names from the channel count.
    fn channel_names(&self) -> Vec<String> {
        default_channel_names(self.geometry().channels)
    }

    /// Fill `out` with row `row`, channel-interleaved.
    ///
    /// `out` is exactly `geometry().row_len()` samples long.
    fn read_scanline(&mut self, row: usize, out: &mut [f32]) -> Result<(), PipelineError>;
}

impl<S: ScanlineSource + ?Sized> ScanlineSource for Box<S> {
    fn geometry(&self) -> ImageGeometry {
        (**self).geometry()
    }

    fn channel_names(&self) -> Vec<String> {
        (**self).channel_names()
    }

    fn read_scanline(&mut self, row: usize, out: &mut [f32]) -> Result<(), PipelineError> {
        (**self).read_scanline(row, out)
    }
}

/// Conventional channel names for a channel count.
///
/// 1 → `Y`, 2 → `Y A`, 3 → `R G B`, 4 → `R G B A`; any further channels are
/// numbered `C4`, `C5`, ...
pub fn default_channel_names(channels: usize) -> Vec<String> {
    let base: &[&str] = match channels {
        0 => &[],
        1 => &["Y"],
        2 => &["Y", "A"],
        3 => &["R", "G", "B"],
        _ => &["R", "G", "B", "A"],
    };
    base.iter()
        .map(|s| s.to_string())
        .chain((base.len()..channels).map(|i| format!("C{}", i)))
        .collect()
}
