use crate::waveform::{Waveform, WaveformKind};

/// Concatenates `cycles` cycles of `steps_per_cycle` values each, whose peaks
/// are annealed from `max_value` down to `min_value` by `annealer`.
///
/// With a cosine annealer and a linear decrease per cycle this yields the
/// classic cosine annealed sawtooth.
///
/// # Returns
/// A vec of `cycles * steps_per_cycle` values.
pub fn annealed_cycles(
    cycles: usize,
    steps_per_cycle: usize,
    annealer: WaveformKind,
    waveform: WaveformKind,
    max_value: f32,
    min_value: f32,
) -> Vec<f32> {
    annealer
        .generate(cycles, max_value, min_value)
        .into_iter()
        .flat_map(|peak| waveform.generate(steps_per_cycle, peak, min_value))
        .collect()
}
