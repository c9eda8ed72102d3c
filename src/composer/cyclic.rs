use log::debug;

use crate::{
    dataset::DatasetSize,
    error::{Result, ScheduleErr},
    waveform::{Waveform, WaveformKind},
};

/// Every cycle is made of two half cycles of `step` epochs each.
pub const HALF_CYCLES_PER_CYCLE: usize = 2;

/// Computes how many batches fit in one epoch over `dataset`.
///
/// # Arguments
/// * `dataset` - Anything that knows how many training samples it holds.
/// * `batch_size` - The amount of samples per batch.
///
/// # Returns
/// The amount of full batches per epoch, or an error if `batch_size` is zero.
pub fn batches_per_epoch<D: DatasetSize + ?Sized>(dataset: &D, batch_size: usize) -> Result<usize> {
    if batch_size == 0 {
        return Err(ScheduleErr::invalid("batch_size", "must be greater than 0"));
    }

    Ok(dataset.num_samples() / batch_size)
}

/// How the peak of each cycle is chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Peaks {
    /// Every cycle peaks at the base maximum.
    #[default]
    Constant,
    /// The peaks follow the given shape from the base maximum down to the base minimum.
    Annealed(WaveformKind),
    /// One peak per cycle, given by the caller.
    Explicit(Vec<f32>),
}

/// Repeating cycles for warm restart style training.
///
/// Cycle `i` holds `2 * step_sizes[i] * batches_per_epoch` values of `waveform`
/// between `base_min` and that cycle's peak. There is no annihilation tail.
#[derive(Debug, Clone)]
pub struct CyclicSchedule {
    step_sizes: Vec<usize>,
    batches_per_epoch: usize,
    base_min: f32,
    base_max: f32,
    waveform: WaveformKind,
    peaks: Peaks,
}

impl CyclicSchedule {
    /// Creates a new `CyclicSchedule` composer with triangular cycles and constant peaks.
    ///
    /// # Arguments
    /// * `step_sizes` - The amount of epochs per half cycle, one entry per cycle.
    /// * `batches_per_epoch` - The amount of batches in one epoch.
    /// * `base_min` - The floor of every cycle.
    /// * `base_max` - The highest peak.
    ///
    /// # Returns
    /// A new `CyclicSchedule` instance.
    pub fn new(step_sizes: Vec<usize>, batches_per_epoch: usize, base_min: f32, base_max: f32) -> Self {
        Self {
            step_sizes,
            batches_per_epoch,
            base_min,
            base_max,
            waveform: WaveformKind::Triangular,
            peaks: Peaks::Constant,
        }
    }

    /// Replaces the shape of every cycle.
    pub fn with_waveform(mut self, waveform: WaveformKind) -> Self {
        self.waveform = waveform;
        self
    }

    /// Replaces the way cycle peaks are chosen.
    pub fn with_peaks(mut self, peaks: Peaks) -> Self {
        self.peaks = peaks;
        self
    }

    /// The amount of values in a cycle of `step` epochs per half cycle, `None` on overflow.
    fn cycle_len(&self, step: usize) -> Option<usize> {
        HALF_CYCLES_PER_CYCLE
            .checked_mul(step)?
            .checked_mul(self.batches_per_epoch)
    }

    /// Checks every parameter and returns the length of each cycle.
    fn validate(&self) -> Result<Vec<usize>> {
        if self.step_sizes.is_empty() {
            return Err(ScheduleErr::invalid("step_sizes", "must not be empty"));
        }

        if let Some(i) = self.step_sizes.iter().position(|&step| step == 0) {
            return Err(ScheduleErr::invalid(
                "step_sizes",
                format!("step size {i} must be greater than 0"),
            ));
        }

        if self.batches_per_epoch == 0 {
            return Err(ScheduleErr::invalid(
                "batches_per_epoch",
                "must be greater than 0, the dataset is smaller than one batch",
            ));
        }

        if let Peaks::Explicit(peaks) = &self.peaks {
            if peaks.len() != self.step_sizes.len() {
                return Err(ScheduleErr::invalid(
                    "peaks",
                    format!(
                        "got {} peaks for {} cycles",
                        peaks.len(),
                        self.step_sizes.len()
                    ),
                ));
            }
        }

        let max_len = isize::MAX as usize / size_of::<f32>();
        let overflow = || {
            ScheduleErr::invalid(
                "step_sizes",
                format!(
                    "the schedule would hold more than {max_len} values with {} batches per epoch",
                    self.batches_per_epoch
                ),
            )
        };

        let lens = self
            .step_sizes
            .iter()
            .map(|&step| self.cycle_len(step).ok_or_else(overflow))
            .collect::<Result<Vec<_>>>()?;

        lens.iter()
            .try_fold(0usize, |total, &len| total.checked_add(len))
            .filter(|&total| total <= max_len)
            .ok_or_else(overflow)?;

        Ok(lens)
    }

    /// Returns the peak of every cycle.
    fn peaks(&self) -> Vec<f32> {
        let cycles = self.step_sizes.len();

        match &self.peaks {
            Peaks::Constant => vec![self.base_max; cycles],
            Peaks::Annealed(annealer) => annealer.generate(cycles, self.base_max, self.base_min),
            Peaks::Explicit(peaks) => peaks.clone(),
        }
    }

    /// Generates every cycle and concatenates them in order.
    ///
    /// # Returns
    /// A vec of `2 * sum(step_sizes) * batches_per_epoch` values, or an error if
    /// any parameter is out of its domain or that length does not fit in memory.
    pub fn generate(&self) -> Result<Vec<f32>> {
        let lens = self.validate()?;

        let mut values = Vec::with_capacity(lens.iter().sum());
        for (peak, len) in self.peaks().into_iter().zip(lens) {
            values.extend(self.waveform.generate(len, peak, self.base_min));
        }

        debug!(
            cycles = self.step_sizes.len(),
            len = values.len();
            "cyclic {:?} schedule generated",
            self.waveform
        );

        Ok(values)
    }
}
