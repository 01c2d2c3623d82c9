//! Output of the thumbnail pipeline.
//!
//! [`Thumbnail`] pairs the tone-mapped [`PixelBuffer`](crate::PixelBuffer)
//! with the [`NormalizeOutcome`](crate::tone::NormalizeOutcome) of the run,
//! so callers can report whether exposure normalization actually happened.

mod thumbnail;

pub use thumbnail::Thumbnail;
