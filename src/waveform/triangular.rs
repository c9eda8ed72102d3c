use super::{Waveform, linspace};

/// Splits `count` in two halves, an odd sample goes to the first one.
///
/// # Returns
/// The lengths of the first and second halves.
fn halves(count: usize) -> (usize, usize) {
    let step = count / 2;
    let extra = count % 2;
    (step + extra, step)
}

/// Returns the value the second half starts from: the one right before the
/// first half's turning point, or its only value if it has just one.
fn before_turn(first: &[f32]) -> f32 {
    first[first.len().saturating_sub(2)]
}

/// Rises linearly from `min_value` to `max_value` and falls back to `min_value`.
///
/// The peak sits at index `count / 2 + count % 2 - 1`. The falling half never
/// repeats the peak, it starts from the value right before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangular;

impl Waveform for Triangular {
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32> {
        if count == 0 {
            return Vec::new();
        }

        let (first_len, second_len) = halves(count);
        let mut values = linspace(min_value, max_value, first_len);
        let from = before_turn(&values);

        values.extend(linspace(from, min_value, second_len));
        values
    }
}

/// Falls linearly from `max_value` to `min_value` and rises back to `max_value`.
///
/// The mirror image of [`Triangular`], the trough sits at index
/// `count / 2 + count % 2 - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseTriangular;

impl Waveform for ReverseTriangular {
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32> {
        if count == 0 {
            return Vec::new();
        }

        let (first_len, second_len) = halves(count);
        let mut values = linspace(max_value, min_value, first_len);
        let from = before_turn(&values);

        values.extend(linspace(from, max_value, second_len));
        values
    }
}
