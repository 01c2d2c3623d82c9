//! thumbnail-pipeline: preview generation for high dynamic range scanline images
//!
//! This library reduces a full-resolution scanline image to a small preview
//! and tone maps it for display. It does no file I/O: images come in through
//! the [`ScanlineSource`] trait, one row at a time, and leave as a
//! [`PixelBuffer`] of `f32` samples.
//!
//! # Quick Start
//!
//! The [`ThumbnailPipeline`] builder is the primary entry point:
//!
//! ```
//! use thumbnail_pipeline::{MemorySource, PixelBuffer, ThumbnailPipeline};
//!
//! let pixels = PixelBuffer::zeroed(1024, 512, 3);
//! let mut source = MemorySource::new(pixels);
//!
//! let thumb = ThumbnailPipeline::new(256).gamma(1.8).run(&mut source).unwrap();
//! assert_eq!((thumb.width(), thumb.height()), (256, 128));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! ScanlineSource          (full resolution, read row by row)
//!     |
//!     v
//! [Resample]              nearest-neighbor per axis, tiled sources rejected
//!     |
//!     v
//! PixelBuffer             [lowres_height][lowres_width][channels]
//!     |
//!     v
//! [Normalize]             divide by the 99th-percentile sample, zeros kept
//!     |
//!     v
//! [Gamma]                 max(s, 0)^(1/gamma)
//!     |
//!     v
//! Thumbnail               buffer + normalization outcome
//! ```
//!
//! ## Geometry
//!
//! The thumbnail height preserves the aspect ratio and is truncated, never
//! rounded: `floor(source_height * lowres_width / source_width)`. A source
//! far wider than tall can therefore produce a zero-height thumbnail; every
//! stage accepts the resulting empty buffer.
//!
//! ## Why Percentile Normalization
//!
//! Scanned HDR material often contains a few specular highlights orders of
//! magnitude brighter than the rest. Scaling by the maximum would leave the
//! image nearly black; scaling by the 99th percentile lets the top 1% clip
//! and keeps the bulk of the image in range.
//!
//! Zero samples mark masked or background regions and are never rescaled.
//! When the percentile sample is zero (or otherwise unusable) normalization
//! is skipped rather than dividing by it; see [`tone::NormalizeOutcome`].

pub mod api;
pub mod buffer;
pub mod output;
pub mod resample;
pub mod source;
pub mod tone;


pub use api::{PipelineError, ThumbnailPipeline};
pub use buffer::{ImageGeometry, PixelBuffer};
pub use output::Thumbnail;
pub use resample::{lowres_height, resample_nearest, source_index};
pub use source::{MemorySource, ScanlineSource};
pub use tone::{NormalizeOutcome, ToneOptions};
