mod any;
mod cursor;
mod cyclic;
mod one_cycle;
mod range_finder;
mod scheduler;

pub use any::AnyScheduler;
pub use cursor::ScheduleCursor;
pub use cyclic::CyclicScheduler;
pub use one_cycle::OneCycleScheduler;
pub use range_finder::LrRangeFinder;
pub use scheduler::{LrMomentum, Scheduler, Step, StepValue};
