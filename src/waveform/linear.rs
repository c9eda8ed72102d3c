use super::{Waveform, linspace};

/// Evenly spaced values rising from `min_value` to `max_value`.
///
/// This is the shape used by the learning rate range finder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearIncrease;

impl Waveform for LinearIncrease {
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32> {
        linspace(min_value, max_value, count)
    }
}

/// Evenly spaced values falling from `max_value` to `min_value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDecrease;

impl Waveform for LinearDecrease {
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32> {
        linspace(max_value, min_value, count)
    }
}
