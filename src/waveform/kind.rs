use serde::{Deserialize, Serialize};

use super::{Cosine, LinearDecrease, LinearIncrease, ReverseTriangular, Triangular, Waveform};

/// Selects a [`Waveform`] whenever the shape is only known at run time,
/// e.g. when it comes from a scheduler spec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveformKind {
    LinearIncrease,
    LinearDecrease,
    Cosine,
    #[default]
    Triangular,
    ReverseTriangular,
}

impl Waveform for WaveformKind {
    fn generate(&self, count: usize, max_value: f32, min_value: f32) -> Vec<f32> {
        match self {
            WaveformKind::LinearIncrease => LinearIncrease.generate(count, max_value, min_value),
            WaveformKind::LinearDecrease => LinearDecrease.generate(count, max_value, min_value),
            WaveformKind::Cosine => Cosine.generate(count, max_value, min_value),
            WaveformKind::Triangular => Triangular.generate(count, max_value, min_value),
            WaveformKind::ReverseTriangular => {
                ReverseTriangular.generate(count, max_value, min_value)
            }
        }
    }
}
