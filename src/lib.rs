//! exr-thumbnail - tone-mapped previews of high dynamic range scans
//!
//! Reduces a full-resolution scanline image (OpenEXR or PNG) to a small
//! preview, normalizes its exposure to the 99th percentile and applies a
//! display gamma. The image processing itself lives in the
//! `thumbnail-pipeline` crate; this crate adds codecs, configuration and
//! the command line tool.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
