use std::f32::consts::PI;

use super::{Waveform, linspace};

/// Half a cosine period, starting at `max_value` and settling at `min_value`.
///
/// Moves slowly near both ends and fastest around the middle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl Waveform for Cosine {
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32> {
        let half_range = (max_value - min_value) / 2.;

        linspace(0., PI, count)
            .into_iter()
            .map(|theta| (theta.cos() + 1.) * half_range + min_value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const MIN: f32 = 0.1;
    const MAX: f32 = 1.;

    #[test]
    fn endpoints() {
        for count in [9, 10] {
            let values = Cosine.generate(count, MAX, MIN);

            assert_eq!(values.len(), count);
            assert_abs_diff_eq!(values[0], MAX, epsilon = 1e-6);
            assert_abs_diff_eq!(values[count - 1], MIN, epsilon = 1e-6);
        }
    }

    #[test]
    fn non_increasing() {
        let values = Cosine.generate(100, MAX, MIN);

        for pair in values.windows(2) {
            assert!(pair[1] <= pair[0], "{} > {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn midpoint_is_average() {
        let values = Cosine.generate(11, MAX, MIN);
        assert_abs_diff_eq!(values[5], (MAX + MIN) / 2., epsilon = 1e-6);
    }

    #[test]
    fn single_sample_is_max() {
        let values = Cosine.generate(1, MAX, MIN);

        assert_eq!(values.len(), 1);
        assert_abs_diff_eq!(values[0], MAX, epsilon = 1e-6);
    }
}
