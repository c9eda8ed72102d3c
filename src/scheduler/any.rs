use super::{CyclicScheduler, LrRangeFinder, OneCycleScheduler, Scheduler, Step};
use crate::error::Result;

/// One of the concrete schedulers, chosen at run time.
#[derive(Debug, Clone)]
pub enum AnyScheduler {
    OneCycle(OneCycleScheduler),
    RangeFinder(LrRangeFinder),
    Cyclic(CyclicScheduler),
}

impl From<OneCycleScheduler> for AnyScheduler {
    fn from(value: OneCycleScheduler) -> Self {
        Self::OneCycle(value)
    }
}

impl From<LrRangeFinder> for AnyScheduler {
    fn from(value: LrRangeFinder) -> Self {
        Self::RangeFinder(value)
    }
}

impl From<CyclicScheduler> for AnyScheduler {
    fn from(value: CyclicScheduler) -> Self {
        Self::Cyclic(value)
    }
}

impl Scheduler for AnyScheduler {
    type Value = Step;

    fn advance(&mut self) -> Result<Step> {
        match self {
            AnyScheduler::OneCycle(s) => s.advance().map(Step::from),
            AnyScheduler::RangeFinder(s) => s.advance().map(Step::from),
            AnyScheduler::Cyclic(s) => s.advance().map(Step::from),
        }
    }

    fn current(&self) -> Step {
        match self {
            AnyScheduler::OneCycle(s) => s.current().into(),
            AnyScheduler::RangeFinder(s) => s.current().into(),
            AnyScheduler::Cyclic(s) => s.current().into(),
        }
    }

    fn position(&self) -> usize {
        match self {
            AnyScheduler::OneCycle(s) => s.position(),
            AnyScheduler::RangeFinder(s) => s.position(),
            AnyScheduler::Cyclic(s) => s.position(),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyScheduler::OneCycle(s) => s.len(),
            AnyScheduler::RangeFinder(s) => s.len(),
            AnyScheduler::Cyclic(s) => s.len(),
        }
    }

    fn reset(&mut self) {
        match self {
            AnyScheduler::OneCycle(s) => s.reset(),
            AnyScheduler::RangeFinder(s) => s.reset(),
            AnyScheduler::Cyclic(s) => s.reset(),
        }
    }
}
