use serde::{Deserialize, Serialize};

use crate::{error::Result, waveform::WaveformKind};

/// How the cyclic scheduler picks the peak of each cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeaksSpec {
    #[default]
    Constant,
    Annealed { annealer: WaveformKind },
    Explicit { peaks: Vec<f32> },
}

/// The specification for the `Scheduler` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerSpec {
    OneCycle {
        num_batches: usize,
        annihilation_batches: usize,
        annihilation_divisor: f32,
        min_lr: f32,
        max_lr: f32,
        min_momentum: f32,
        max_momentum: f32,
    },
    RangeFinder {
        num_batches: usize,
        min_lr: f32,
        max_lr: f32,
    },
    Cyclic {
        dataset_size: usize,
        batch_size: usize,
        step_sizes: Vec<usize>,
        min_lr: f32,
        max_lr: f32,
        #[serde(default)]
        waveform: WaveformKind,
        #[serde(default)]
        peaks: PeaksSpec,
    },
}

impl SchedulerSpec {
    /// Parses a `SchedulerSpec` from its JSON representation.
    ///
    /// # Errors
    /// Returns `ScheduleErr::Config` if the text is not a valid spec.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the spec back into JSON.
    ///
    /// # Errors
    /// Returns `ScheduleErr::Config` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
