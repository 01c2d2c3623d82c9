//! Tone stages applied to the resampled buffer.
//!
//! Two in-place passes, always in this order:
//!
//! 1. **Normalize** - divide by the 99th-percentile sample so typical
//!    highlights land at 1.0 ([`normalize()`])
//! 2. **Gamma** - `sample^(1/gamma)` with negatives clamped to 0
//!    ([`apply_gamma()`])
//!
//! Exact zeros survive both passes unchanged.
//!
//! # Example
//!
//! ```
//! use thumbnail_pipeline::tone::{apply_gamma, normalize, NormalizeOutcome};
//!
//! let mut samples = vec![0.0, 1.0, 4.0, 16.0];
//! assert_eq!(normalize(&mut samples, 1.0), NormalizeOutcome::Scaled { scale: 16.0 });
//! apply_gamma(&mut samples, 2.0);
//! assert_eq!(samples, vec![0.0, 0.25, 0.5, 1.0]);
//! ```

mod gamma;
mod normalize;
mod options;

pub use gamma::apply_gamma;
pub use normalize::{normalize, scale_factor, NormalizeOutcome};
pub use options::{ToneOptions, DEFAULT_GAMMA, DEFAULT_PERCENTILE};
