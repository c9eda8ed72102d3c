use log::info;

use crate::{
    composer::{OneCyclePolicy, Peaks},
    error::Result,
    scheduler::{AnyScheduler, CyclicScheduler, LrRangeFinder, OneCycleScheduler, Scheduler},
    specs::{PeaksSpec, SchedulerSpec},
};

/// Builds schedulers out of their specs.
pub struct SchedulerBuilder;

impl SchedulerBuilder {
    /// Builds the scheduler described by `spec`.
    ///
    /// # Args
    /// * `spec` - The scheduler specification, usually parsed from JSON.
    ///
    /// # Returns
    /// A ready to use scheduler, or an error if the spec's parameters are invalid.
    pub fn build(spec: SchedulerSpec) -> Result<AnyScheduler> {
        let scheduler: AnyScheduler = match spec {
            SchedulerSpec::OneCycle {
                num_batches,
                annihilation_batches,
                annihilation_divisor,
                min_lr,
                max_lr,
                min_momentum,
                max_momentum,
            } => OneCycleScheduler::new(OneCyclePolicy {
                num_batches,
                annihilation_batches,
                annihilation_divisor,
                max_lr,
                min_lr,
                max_momentum,
                min_momentum,
            })?
            .into(),
            SchedulerSpec::RangeFinder {
                num_batches,
                min_lr,
                max_lr,
            } => LrRangeFinder::new(num_batches, min_lr, max_lr)?.into(),
            SchedulerSpec::Cyclic {
                dataset_size,
                batch_size,
                step_sizes,
                min_lr,
                max_lr,
                waveform,
                peaks,
            } => CyclicScheduler::with_shape(
                &dataset_size,
                batch_size,
                step_sizes,
                min_lr,
                max_lr,
                waveform,
                Self::adapt_peaks(peaks),
            )?
            .into(),
        };

        info!(steps = scheduler.len(); "scheduler built");

        Ok(scheduler)
    }

    fn adapt_peaks(peaks: PeaksSpec) -> Peaks {
        match peaks {
            PeaksSpec::Constant => Peaks::Constant,
            PeaksSpec::Annealed { annealer } => Peaks::Annealed(annealer),
            PeaksSpec::Explicit { peaks } => Peaks::Explicit(peaks),
        }
    }
}
