use log::debug;

use super::{ScheduleCursor, Scheduler};
use crate::{
    error::{Result, ScheduleErr},
    waveform::{LinearIncrease, Waveform},
};

/// Sweeps the learning rate linearly from `min_lr` to `max_lr`.
///
/// Run it for a short while and watch the loss to find usable bounds for the
/// cyclic and one-cycle schedulers.
#[derive(Debug, Clone)]
pub struct LrRangeFinder {
    cursor: ScheduleCursor<f32>,
}

impl LrRangeFinder {
    /// Creates a new `LrRangeFinder`.
    ///
    /// # Arguments
    /// * `num_batches` - The amount of steps in the sweep.
    /// * `min_lr` - The first learning rate.
    /// * `max_lr` - The last learning rate.
    ///
    /// # Returns
    /// A new `LrRangeFinder`, or an error if `num_batches` is zero.
    pub fn new(num_batches: usize, min_lr: f32, max_lr: f32) -> Result<Self> {
        if num_batches == 0 {
            return Err(ScheduleErr::invalid("num_batches", "must be greater than 0"));
        }

        let values = LinearIncrease.generate(num_batches, max_lr, min_lr);
        debug!(steps = num_batches, min_lr = min_lr, max_lr = max_lr; "range finder ready");

        Ok(Self {
            cursor: ScheduleCursor::new(values, min_lr),
        })
    }

    /// The whole sweep.
    pub fn values(&self) -> &[f32] {
        self.cursor.values()
    }
}

impl Scheduler for LrRangeFinder {
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

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::optim::ParamGroup;

    #[test]
    fn sweeps_from_min_to_max() {
        let mut finder = LrRangeFinder::new(50, 0.1, 1.).unwrap();

        let first = finder.advance().unwrap();
        assert_abs_diff_eq!(first, 0.1, epsilon = 1e-6);

        let mut last = first;
        for _ in 1..50 {
            let lr = finder.advance().unwrap();
            assert!(lr > last);
            last = lr;
        }

        assert_abs_diff_eq!(last, 1., epsilon = 1e-6);
        assert!(finder.advance().is_err());
    }

    #[test]
    fn leaves_momentum_alone() {
        let mut finder = LrRangeFinder::new(3, 0.1, 1.).unwrap();
        let mut optimizer = vec![ParamGroup::new(0., 0.9)];

        let lr = finder.apply(&mut optimizer).unwrap();

        let group = optimizer[0];
        assert_eq!(group.learning_rate, lr);
        assert_eq!(group.momentum, 0.9);
    }

    #[test]
    fn rejects_empty_sweep() {
        assert!(LrRangeFinder::new(0, 0.1, 1.).is_err());
    }
}
