mod annealed;
mod cyclic;
mod one_cycle;

pub use annealed::annealed_cycles;
pub use cyclic::{CyclicSchedule, HALF_CYCLES_PER_CYCLE, Peaks, batches_per_epoch};
pub use one_cycle::{OneCycle, OneCyclePolicy};
