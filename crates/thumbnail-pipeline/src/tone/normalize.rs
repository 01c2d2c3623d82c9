//! Percentile-based exposure normalization.
//!
//! Samples are divided by the value at a high percentile so that a handful
//! of very bright outliers cannot crush the rest of the image into black.
//! Exact zeros are "no data" (masked or background regions) and are never
//! rescaled.

/// What [`normalize()`] did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizeOutcome {
    /// Every non-zero sample was divided by `scale`.
    Scaled {
        /// The percentile sample used as divisor
        scale: f32,
    },
    /// The buffer was empty; nothing to do.
    SkippedEmpty,
    /// The percentile sample was zero, negative or not finite, so samples
    /// were left untouched.
    SkippedDegenerateScale {
        /// The rejected percentile sample
        scale: f32,
    },
    /// Normalization was disabled by configuration.
    Disabled,
}

impl NormalizeOutcome {
    /// The divisor that was applied, if any.
    pub fn scale(&self) -> Option<f32> {
        match self {
            NormalizeOutcome::Scaled { scale } => Some(*scale),
            _ => None,
        }
    }
}

/// Value at `percentile` among `samples`, counting from the top.
///
/// Samples are ranked in descending order and the one at index
/// `floor((1 - percentile) * count)` is returned, i.e. for 0.99 the value
/// that only the brightest 1% of samples exceed. NaN samples are not ranked.
/// Returns `None` if there is nothing to rank.
///
/// Uses a selection rather than a full sort; the result is identical.
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::tone::scale_factor;
///
/// let mut samples = vec![1.0f32; 199];
/// samples.push(100.0);
/// // floor(0.01 * 200) = 2: the single outlier is skipped over.
/// assert_eq!(scale_factor(&samples, 0.99), Some(1.0));
/// assert_eq!(scale_factor(&[], 0.99), None);
/// ```
pub fn scale_factor(samples: &[f32], percentile: f64) -> Option<f32> {
    let mut ranked: Vec<f32> = samples.iter().copied().filter(|s| !s.is_nan()).collect();
    if ranked.is_empty() {
        return None;
    }

    let count = ranked.len();
    let index = (((1.0 - percentile) * count as f64).floor() as usize).min(count - 1);
    let (_, value, _) = ranked.select_nth_unstable_by(index, |a, b| b.total_cmp(a));
    Some(*value)
}

/// Rescale `samples` in place so the `percentile` sample maps to 1.0.
///
/// Zero samples stay exactly zero. An empty buffer, or a scale factor that
/// is not a finite positive number, leaves the buffer untouched and is
/// reported through the returned [`NormalizeOutcome`].
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::tone::{normalize, NormalizeOutcome};
///
/// let mut samples = vec![0.0, 2.0, 4.0, 4.0];
/// let outcome = normalize(&mut samples, 0.75);
///
/// assert_eq!(outcome, NormalizeOutcome::Scaled { scale: 4.0 });
/// assert_eq!(samples, vec![0.0, 0.5, 1.0, 1.0]);
/// ```
pub fn normalize(samples: &mut [f32], percentile: f64) -> NormalizeOutcome {
    if samples.is_empty() {
        return NormalizeOutcome::SkippedEmpty;
    }

    let scale = scale_factor(samples, percentile).unwrap_or(f32::NAN);
    if !(scale.is_finite() && scale > 0.0) {
        return NormalizeOutcome::SkippedDegenerateScale { scale };
    }

    for sample in samples.iter_mut() {
        if *sample != 0.0 {
            *sample /= scale;
        }
    }
    NormalizeOutcome::Scaled { scale }
}
