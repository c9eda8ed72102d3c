/// A `Waveform` produces a single cycle of values with a fixed interpolation shape.
pub trait Waveform {
    /// Samples `count` values of the shape between `min_value` and `max_value`.
    ///
    /// # Arguments
    /// * `count` - The amount of values to generate, `0` yields an empty vec.
    /// * `max_value` - The upper bound of the shape.
    /// * `min_value` - The lower bound of the shape.
    ///
    /// # Returns
    /// A vec of exactly `count` values.
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32>;
}

/// Returns `n` evenly spaced samples from `start` to `stop`, both inclusive.
///
/// A single sample is `start`. The last sample is pinned to `stop` so the endpoint
/// never drifts because of accumulated rounding.
pub(crate) fn linspace(start: f32, stop: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f32;

            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f32 })
                .collect()
        }
    }
}
