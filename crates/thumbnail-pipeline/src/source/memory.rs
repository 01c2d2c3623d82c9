//! In-memory scanline source.

use super::ScanlineSource;
use crate::api::PipelineError;
use crate::buffer::{ImageGeometry, PixelBuffer};

/// A [`ScanlineSource`] backed by a decoded [`PixelBuffer`].
///
/// Useful when pixels are already in memory, and for tests: the source
/// counts how many scanlines were read, and can pretend to be tiled.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::{MemorySource, PixelBuffer, ScanlineSource};
///
/// let buffer = PixelBuffer::zeroed(8, 4, 3);
/// let mut source = MemorySource::new(buffer);
///
/// let mut row = vec![1.0; 8 * 3];
/// source.read_scanline(2, &mut row).unwrap();
/// assert!(row.iter().all(|&s| s == 0.0));
/// assert_eq!(source.reads(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource {
    buffer: PixelBuffer,
    tiled: bool,
    channel_names: Option<Vec<String>>,
    reads: usize,
}

impl MemorySource {
    pub fn new(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            tiled: false,
            channel_names: None,
            reads: 0,
        }
    }

    /// Report the source as tiled (the pixels stay readable).
    pub fn tiled(mut self, tiled: bool) -> Self {
        self.tiled = tiled;
        self
    }

    /// Override the reported channel names.
    pub fn with_channel_names(mut self, names: Vec<String>) -> Self {
        self.channel_names = Some(names);
        self
    }

    /// Number of scanlines read so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

impl ScanlineSource for MemorySource {
    fn geometry(&self) -> ImageGeometry {
        ImageGeometry::new(
            self.buffer.width(),
            self.buffer.height(),
            self.buffer.channels(),
            self.tiled,
        )
    }

    fn channel_names(&self) -> Vec<String> {
        match &self.channel_names {
            Some(names) => names.clone(),
            None => super::default_channel_names(self.buffer.channels()),
        }
    }

    fn read_scanline(&mut self, row: usize, out: &mut [f32]) -> Result<(), PipelineError> {
        let height = self.buffer.height();
        if row >= height {
            return Err(PipelineError::ScanlineOutOfRange { row, height });
        }
        let line = self.buffer.row(row);
        if out.len() != line.len() {
            return Err(PipelineError::BufferLength {
                expected: line.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(line);
        self.reads += 1;
        Ok(())
    }
}
