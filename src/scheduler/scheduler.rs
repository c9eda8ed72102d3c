use log::trace;

use crate::{error::Result, optim::Optimizer, optim::ParamGroup};

/// A value handed out by a scheduler for a single training step.
pub trait StepValue: Copy {
    /// Writes the value into a parameter group.
    fn write_to(&self, group: &mut ParamGroup);

    /// The learning rate part of the value.
    fn learning_rate(&self) -> f32;
}

impl StepValue for f32 {
    fn write_to(&self, group: &mut ParamGroup) {
        group.learning_rate = *self;
    }

    fn learning_rate(&self) -> f32 {
        *self
    }
}

/// A learning rate paired with its momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LrMomentum {
    pub learning_rate: f32,
    pub momentum: f32,
}

impl StepValue for LrMomentum {
    fn write_to(&self, group: &mut ParamGroup) {
        group.learning_rate = self.learning_rate;
        group.momentum = self.momentum;
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

/// A learning rate and, for schedules that drive it, a momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub learning_rate: f32,
    pub momentum: Option<f32>,
}

impl StepValue for Step {
    fn write_to(&self, group: &mut ParamGroup) {
        group.learning_rate = self.learning_rate;
        if let Some(momentum) = self.momentum {
            group.momentum = momentum;
        }
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl From<f32> for Step {
    fn from(learning_rate: f32) -> Self {
        Self {
            learning_rate,
            momentum: None,
        }
    }
}

impl From<LrMomentum> for Step {
    fn from(value: LrMomentum) -> Self {
        Self {
            learning_rate: value.learning_rate,
            momentum: Some(value.momentum),
        }
    }
}

/// Hands out a precomputed sequence of hyperparameters, one per training step.
pub trait Scheduler {
    type Value: StepValue;

    /// Returns the next value and moves one step forward.
    ///
    /// # Returns
    /// The next value, or `ScheduleErr::Exhausted` if every value was handed out.
    fn advance(&mut self) -> Result<Self::Value>;

    /// Returns the last value produced without advancing.
    fn current(&self) -> Self::Value;

    /// The amount of values handed out so far.
    fn position(&self) -> usize;

    /// The total amount of values in the schedule.
    fn len(&self) -> usize;

    /// Moves back to the start of the schedule.
    fn reset(&mut self);

    /// The amount of values left to hand out.
    fn remaining(&self) -> usize {
        self.len() - self.position()
    }

    /// Whether the schedule has no values at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advances one step and writes the value into every parameter group of `optimizer`.
    ///
    /// # Arguments
    /// * `optimizer` - The optimizer whose hyperparameters are overwritten.
    ///
    /// # Returns
    /// The value written, or `ScheduleErr::Exhausted` if the schedule is over, in which
    /// case `optimizer` is left untouched.
    fn apply<O: Optimizer + ?Sized>(&mut self, optimizer: &mut O) -> Result<Self::Value> {
        let value = self.advance()?;

        for group in optimizer.param_groups_mut() {
            value.write_to(group);
        }

        trace!(
            step = self.position(),
            lr = value.learning_rate();
            "applied schedule step"
        );

        Ok(value)
    }
}
