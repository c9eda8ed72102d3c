use log::debug;

use crate::{
    error::{Result, ScheduleErr},
    waveform::{LinearDecrease, Waveform, WaveformKind},
};

/// A single warmup/cooldown cycle followed by an annihilation tail.
///
/// The cycle spans `total_steps` values of `waveform` between `min_value` and
/// `max_value`. The tail is a linear decrease of `annihilation_steps` values from
/// `annihilation_start` (`min_value` unless overridden) down to
/// `annihilation_start / annihilation_divisor`.
#[derive(Debug, Clone)]
pub struct OneCycle {
    total_steps: usize,
    annihilation_steps: usize,
    annihilation_divisor: f32,
    max_value: f32,
    min_value: f32,
    annihilation_start: Option<f32>,
    waveform: WaveformKind,
}

impl OneCycle {
    /// Creates a new `OneCycle` composer with a triangular cycle.
    ///
    /// # Arguments
    /// * `total_steps` - The amount of values in the cycle.
    /// * `annihilation_steps` - The amount of values in the tail.
    /// * `annihilation_divisor` - How much the tail shrinks its starting value.
    /// * `max_value` - The peak of the cycle.
    /// * `min_value` - The floor of the cycle.
    ///
    /// # Returns
    /// A new `OneCycle` instance.
    pub fn new(
        total_steps: usize,
        annihilation_steps: usize,
        annihilation_divisor: f32,
        max_value: f32,
        min_value: f32,
    ) -> Self {
        Self {
            total_steps,
            annihilation_steps,
            annihilation_divisor,
            max_value,
            min_value,
            annihilation_start: None,
            waveform: WaveformKind::Triangular,
        }
    }

    /// Replaces the shape of the cycle.
    pub fn with_waveform(mut self, waveform: WaveformKind) -> Self {
        self.waveform = waveform;
        self
    }

    /// Sets the value the annihilation tail starts from.
    pub fn with_annihilation_start(mut self, start: f32) -> Self {
        self.annihilation_start = Some(start);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.total_steps == 0 {
            return Err(ScheduleErr::invalid("total_steps", "must be greater than 0"));
        }

        if self.annihilation_steps == 0 {
            return Err(ScheduleErr::invalid(
                "annihilation_steps",
                "must be greater than 0",
            ));
        }

        if self.annihilation_divisor == 0. || !self.annihilation_divisor.is_finite() {
            return Err(ScheduleErr::invalid(
                "annihilation_divisor",
                format!("must be finite and non zero, got {}", self.annihilation_divisor),
            ));
        }

        Ok(())
    }

    /// Generates the whole schedule, cycle and tail concatenated.
    ///
    /// # Returns
    /// A vec of `total_steps + annihilation_steps` values, or an error if any
    /// parameter is out of its domain.
    pub fn generate(&self) -> Result<Vec<f32>> {
        self.validate()?;

        let start = self.annihilation_start.unwrap_or(self.min_value);
        let end = start / self.annihilation_divisor;

        let mut values = self
            .waveform
            .generate(self.total_steps, self.max_value, self.min_value);
        values.extend(LinearDecrease.generate(self.annihilation_steps, start, end));

        debug!(
            cycle = self.total_steps,
            tail = self.annihilation_steps;
            "one-cycle {:?} schedule generated",
            self.waveform
        );

        Ok(values)
    }
}

/// The hyperparameters of the 1cycle policy, learning rate and momentum together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneCyclePolicy {
    pub num_batches: usize,
    pub annihilation_batches: usize,
    pub annihilation_divisor: f32,
    pub max_lr: f32,
    pub min_lr: f32,
    pub max_momentum: f32,
    pub min_momentum: f32,
}

impl OneCyclePolicy {
    /// The learning rate composer: a triangular cycle and a decaying tail.
    pub fn learning_rate(&self) -> OneCycle {
        OneCycle::new(
            self.num_batches,
            self.annihilation_batches,
            self.annihilation_divisor,
            self.max_lr,
            self.min_lr,
        )
    }

    /// The momentum composer: a reverse triangular cycle, low while the
    /// learning rate is high, held at `max_momentum` through the tail.
    pub fn momentum(&self) -> OneCycle {
        OneCycle::new(
            self.num_batches,
            self.annihilation_batches,
            1.,
            self.max_momentum,
            self.min_momentum,
        )
        .with_waveform(WaveformKind::ReverseTriangular)
        .with_annihilation_start(self.max_momentum)
    }

    /// Generates both schedules.
    ///
    /// # Returns
    /// The learning rates and momentums, equal in length and paired by index.
    pub fn generate(&self) -> Result<(Vec<f32>, Vec<f32>)> {
        let lrs = self.learning_rate().generate()?;
        let moms = self.momentum().generate()?;
        Ok((lrs, moms))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn policy() -> OneCyclePolicy {
        OneCyclePolicy {
            num_batches: 200,
            annihilation_batches: 20,
            annihilation_divisor: 100.,
            max_lr: 1.,
            min_lr: 0.1,
            max_momentum: 0.99,
            min_momentum: 0.7,
        }
    }

    #[test]
    fn length() {
        let values = OneCycle::new(200, 20, 100., 1., 0.1).generate().unwrap();
        assert_eq!(values.len(), 220);
    }

    #[test]
    fn tail_decays_from_min_value() {
        let values = OneCycle::new(10, 5, 10., 1., 0.1).generate().unwrap();
        let tail = &values[10..];

        assert_abs_diff_eq!(tail[0], 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(tail[4], 0.01, epsilon = 1e-6);
        for pair in tail.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn custom_tail_start() {
        let values = OneCycle::new(4, 3, 2., 1., 0.1)
            .with_annihilation_start(0.8)
            .generate()
            .unwrap();

        for (value, expected) in values[4..].iter().zip([0.8, 0.6, 0.4]) {
            assert_abs_diff_eq!(*value, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn rejects_zero_divisor() {
        let err = OneCycle::new(10, 5, 0., 1., 0.1).generate().unwrap_err();
        assert!(matches!(
            err,
            ScheduleErr::InvalidParameter {
                what: "annihilation_divisor",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_phases() {
        assert!(OneCycle::new(0, 5, 10., 1., 0.1).generate().is_err());
        assert!(OneCycle::new(5, 0, 10., 1., 0.1).generate().is_err());
    }

    #[test]
    fn momentum_moves_against_learning_rate() {
        let (lrs, moms) = policy().generate().unwrap();
        assert_eq!(lrs.len(), moms.len());

        let peak = 200 / 2 - 1;
        assert_abs_diff_eq!(lrs[peak], 1., epsilon = 1e-6);
        assert_abs_diff_eq!(moms[peak], 0.7, epsilon = 1e-6);

        assert_abs_diff_eq!(lrs[0], 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(moms[0], 0.99, epsilon = 1e-6);
    }

    #[test]
    fn momentum_is_constant_through_the_tail() {
        let (_, moms) = policy().generate().unwrap();

        for mom in &moms[200..] {
            assert_abs_diff_eq!(*mom, 0.99, epsilon = 1e-6);
        }
    }
}
