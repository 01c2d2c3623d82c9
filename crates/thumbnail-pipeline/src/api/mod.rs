//! Public API for the thumbnail-pipeline crate.
//!
//! This module provides the high-level API: [`ThumbnailPipeline`] builder and
//! [`PipelineError`] unified error type.

mod builder;
mod error;

pub use builder::ThumbnailPipeline;
pub use error::PipelineError;
