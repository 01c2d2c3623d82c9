//! Inverse-gamma power curve.

/// Apply `sample^(1/gamma)` to every sample in place.
///
/// Negative samples (sensor noise in HDR scans) and NaN are clamped to 0
/// before the power, since a fractional power of a negative number is
/// undefined. Zero stays zero. Values above 1.0 are not clipped here;
/// clipping is a property of the output encoding.
///
/// `gamma` must be finite and positive; see
/// [`ToneOptions::validate`](crate::ToneOptions::validate).
///
/// # Example
///
/// ```
/// use thumbnail_pipeline::tone::apply_gamma;
///
/// let mut samples = vec![0.0, 0.25, 1.0, -0.1];
/// apply_gamma(&mut samples, 2.0);
/// assert_eq!(samples, vec![0.0, 0.5, 1.0, 0.0]);
/// ```
pub fn apply_gamma(samples: &mut [f32], gamma: f32) {
    debug_assert!(gamma.is_finite() && gamma > 0.0, "gamma must be positive");
    let exponent = 1.0 / gamma;
    for sample in samples.iter_mut() {
        // f32::max returns the non-NaN operand, so NaN also becomes 0.
        *sample = sample.max(0.0).powf(exponent);
    }
}
