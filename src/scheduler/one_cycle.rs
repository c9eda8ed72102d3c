use log::debug;

use super::{LrMomentum, ScheduleCursor, Scheduler};
use crate::{composer::OneCyclePolicy, error::Result};

/// Drives the learning rate and momentum of an optimizer through the 1cycle policy.
#[derive(Debug, Clone)]
pub struct OneCycleScheduler {
    policy: OneCyclePolicy,
    cursor: ScheduleCursor<LrMomentum>,
}

impl OneCycleScheduler {
    /// Creates a new `OneCycleScheduler`, generating its whole schedule up front.
    ///
    /// # Arguments
    /// * `policy` - The cycle and annihilation hyperparameters.
    ///
    /// # Returns
    /// A new `OneCycleScheduler` of `num_batches + annihilation_batches` steps, or an
    /// error if the policy is invalid.
    pub fn new(policy: OneCyclePolicy) -> Result<Self> {
        let (lrs, moms) = policy.generate()?;

        let values: Vec<_> = lrs
            .into_iter()
            .zip(moms)
            .map(|(learning_rate, momentum)| LrMomentum {
                learning_rate,
                momentum,
            })
            .collect();

        let initial = LrMomentum {
            learning_rate: policy.min_lr,
            momentum: policy.max_momentum,
        };

        debug!(steps = values.len(); "one-cycle scheduler ready");

        Ok(Self {
            policy,
            cursor: ScheduleCursor::new(values, initial),
        })
    }

    /// The hyperparameters this scheduler was built from.
    pub fn policy(&self) -> &OneCyclePolicy {
        &self.policy
    }

    /// The whole schedule.
    pub fn values(&self) -> &[LrMomentum] {
        self.cursor.values()
    }
}

impl Scheduler for OneCycleScheduler {
    type Value = LrMomentum;

    fn advance(&mut self) -> Result<LrMomentum> {
        self.cursor.advance()
    }

    fn current(&self) -> LrMomentum {
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
