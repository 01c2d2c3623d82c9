//! Image file codecs.
//!
//! Decoding and encoding are delegated to the `exr` and `png` crates; this
//! module only adapts them to [`ScanlineSource`] on the way in and to a
//! finished [`PixelBuffer`](thumbnail_pipeline::PixelBuffer) on the way out.
//!
//! Source formats are detected from the file signature, target formats from
//! the file extension.

mod exr_source;
mod png_source;
mod writer;

pub use exr_source::ExrSource;
pub use png_source::open_png;
pub use writer::{write_thumbnail, TargetFormat};

use crate::error::ThumbnailError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thumbnail_pipeline::ScanlineSource;

const EXR_MAGIC: [u8; 4] = [0x76, 0x2f, 0x31, 0x01];
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Supported source file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Exr,
    Png,
}

impl SourceFormat {
    /// Identify a format from the first bytes of a file.
    pub fn detect(header: &[u8]) -> Option<Self> {
        if header.starts_with(&EXR_MAGIC) {
            Some(SourceFormat::Exr)
        } else if header.starts_with(&PNG_SIGNATURE) {
            Some(SourceFormat::Png)
        } else {
            None
        }
    }
}

/// Open `path` as a scanline source, whatever its format.
///
/// Tiled files are rejected with [`ThumbnailError::UnsupportedLayout`]
/// before their pixel data is decoded.
pub fn open_source(path: &Path) -> Result<Box<dyn ScanlineSource>, ThumbnailError> {
    let format = sniff(path)?;
    tracing::debug!(path = %path.display(), ?format, "Detected source format");

    match format {
        SourceFormat::Exr => Ok(Box::new(ExrSource::open(path)?)),
        SourceFormat::Png => Ok(Box::new(open_png(path)?)),
    }
}

fn sniff(path: &Path) -> Result<SourceFormat, ThumbnailError> {
    let file = File::open(path).map_err(|e| source_open(path, e))?;
    let mut header = Vec::with_capacity(PNG_SIGNATURE.len());
    file.take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut header)
        .map_err(|e| source_open(path, e))?;

    SourceFormat::detect(&header).ok_or_else(|| ThumbnailError::SourceOpen {
        path: path.to_path_buf(),
        reason: "unrecognized image format".to_string(),
    })
}

pub(crate) fn source_open(path: &Path, reason: impl std::fmt::Display) -> ThumbnailError {
    ThumbnailError::SourceOpen {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
