use log::debug;

use super::{ScheduleCursor, Scheduler};
use crate::{
    composer::{CyclicSchedule, Peaks, batches_per_epoch},
    dataset::DatasetSize,
    error::Result,
    waveform::WaveformKind,
};

/// Drives the learning rate through repeating cycles, for training with warm restarts.
///
/// Run `2 * sum(step_sizes)` epochs to end the last cycle back at `min_lr`.
#[derive(Debug, Clone)]
pub struct CyclicScheduler {
    batches_per_epoch: usize,
    cursor: ScheduleCursor<f32>,
}

impl CyclicScheduler {
    /// Creates a new `CyclicScheduler`, generating every cycle up front.
    ///
    /// # Arguments
    /// * `dataset` - The training set, only its size is used.
    /// * `batch_size` - The amount of samples per batch.
    /// * `step_sizes` - The amount of epochs per half cycle, one entry per cycle.
    /// * `min_lr` - The floor of every cycle.
    /// * `max_lr` - The highest peak.
    ///
    /// # Returns
    /// A new `CyclicScheduler` with triangular cycles and constant peaks, or an
    /// error if any parameter is invalid.
    pub fn new<D: DatasetSize + ?Sized>(
        dataset: &D,
        batch_size: usize,
        step_sizes: Vec<usize>,
        min_lr: f32,
        max_lr: f32,
    ) -> Result<Self> {
        Self::with_shape(
            dataset,
            batch_size,
            step_sizes,
            min_lr,
            max_lr,
            WaveformKind::Triangular,
            Peaks::Constant,
        )
    }

    /// Creates a new `CyclicScheduler` with a custom cycle shape and peak policy.
    ///
    /// # Arguments
    /// * `waveform` - The shape of every cycle.
    /// * `peaks` - How the peak of each cycle is chosen.
    ///
    /// See [`CyclicScheduler::new`] for the rest.
    pub fn with_shape<D: DatasetSize + ?Sized>(
        dataset: &D,
        batch_size: usize,
        step_sizes: Vec<usize>,
        min_lr: f32,
        max_lr: f32,
        waveform: WaveformKind,
        peaks: Peaks,
    ) -> Result<Self> {
        let batches_per_epoch = batches_per_epoch(dataset, batch_size)?;

        let values = CyclicSchedule::new(step_sizes, batches_per_epoch, min_lr, max_lr)
            .with_waveform(waveform)
            .with_peaks(peaks)
            .generate()?;

        debug!(
            steps = values.len(),
            batches_per_epoch = batches_per_epoch;
            "cyclic scheduler ready"
        );

        Ok(Self {
            batches_per_epoch,
            cursor: ScheduleCursor::new(values, min_lr),
        })
    }

    /// The amount of batches in one epoch.
    pub fn batches_per_epoch(&self) -> usize {
        self.batches_per_epoch
    }

    /// The whole schedule.
    pub fn values(&self) -> &[f32] {
        self.cursor.values()
    }
}

impl Scheduler for CyclicScheduler {
    type Value = f32;

    fn advance(&mut self) -> Result<f32> {
        self.cursor.advance()
    }

    fn current(&self) -> f32 {
        self.cursor.current()
    }

    fn position(&self) -> usize {
        self.cursor.position()
    }

    fn len(&self) -> usize {
        self.cursor.len()
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
