//! Image geometry and the flat sample buffer shared by every pipeline stage.
//!
//! # Memory Layout
//!
//! A [`PixelBuffer`] is a 3D array `[row][col][channel]` flattened row-major
//! with interleaved channels:
//!
//! ```text
//! index = (row * width + col) * channels + channel
//! ```
//!
//! The buffer length always equals `width * height * channels`.

mod geometry;
mod pixel_buffer;

pub use geometry::ImageGeometry;
pub use pixel_buffer::{PixelBuffer, MAX_SAMPLES};
