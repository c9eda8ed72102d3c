use log::debug;

use super::{Scheduler, StepValue};
use crate::error::{Result, ScheduleErr};

/// A scheduler over an already materialized sequence of values.
///
/// Every concrete scheduler wraps one of these, the sequence is generated once at
/// construction and the cursor only indexes into it.
#[derive(Debug, Clone)]
pub struct ScheduleCursor<T> {
    values: Vec<T>,
    position: usize,
    initial: T,
    current: T,
}

impl<T: StepValue> ScheduleCursor<T> {
    /// Creates a new `ScheduleCursor`.
    ///
    /// # Arguments
    /// * `values` - The whole schedule, in order.
    /// * `initial` - What `current` returns before the first step.
    ///
    /// # Returns
    /// A new `ScheduleCursor` instance positioned at the start of `values`.
    pub fn new(values: Vec<T>, initial: T) -> Self {
        Self {
            values,
            position: 0,
            initial,
            current: initial,
        }
    }

    /// Returns the whole schedule, including the values already handed out.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: StepValue> Scheduler for ScheduleCursor<T> {
    type Value = T;

    fn advance(&mut self) -> Result<T> {
        let Some(&value) = self.values.get(self.position) else {
            let len = self.values.len();
            debug!(len = len; "schedule exhausted");
            return Err(ScheduleErr::Exhausted { len });
        };

        self.position += 1;
        self.current = value;
        Ok(value)
    }

    fn current(&self) -> T {
        self.current
    }

    fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn reset(&mut self) {
        self.position = 0;
        self.current = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_in_order() {
        let mut cursor = ScheduleCursor::new(vec![0.1f32, 0.2, 0.3], 0.);

        assert_eq!(cursor.advance().unwrap(), 0.1);
        assert_eq!(cursor.advance().unwrap(), 0.2);
        assert_eq!(cursor.current(), 0.2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn exhausted_after_len_steps() {
        const N: usize = 5;
        let mut cursor = ScheduleCursor::new(vec![1f32; N], 0.);

        for _ in 0..N {
            cursor.advance().unwrap();
        }

        let err = cursor.advance().unwrap_err();
        assert!(matches!(err, ScheduleErr::Exhausted { len: N }));
        assert_eq!(cursor.position(), N);
        assert_eq!(cursor.current(), 1.);
    }

    #[test]
    fn empty() {
        let mut cursor = ScheduleCursor::<f32>::new(Vec::new(), 0.5);

        assert!(cursor.is_empty());
        assert!(cursor.advance().is_err());
        assert_eq!(cursor.current(), 0.5);
    }

    #[test]
    fn current_before_first_step() {
        let cursor = ScheduleCursor::new(vec![0.3f32], 0.1);
        assert_eq!(cursor.current(), 0.1);
    }

    #[test]
    fn reset_restarts() {
        let mut cursor = ScheduleCursor::new(vec![0.3f32, 0.4], 0.1);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert!(cursor.advance().is_err());

        cursor.reset();
        assert_eq!(cursor.current(), 0.1);
        assert_eq!(cursor.advance().unwrap(), 0.3);
    }
}
