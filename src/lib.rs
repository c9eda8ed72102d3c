//! Cyclical learning rate and momentum schedules.
//!
//! Schedules are built from a handful of waveforms (triangular, reverse
//! triangular, cosine, linear increase and decrease), composed into the 1cycle
//! policy, repeating cycles with optional peak annealing, or a learning rate range
//! sweep. A scheduler hands out one value per training step and writes it into
//! the parameter groups of an optimizer.
//!
//! ```
//! use cyclic_lr::{
//!     composer::OneCyclePolicy,
//!     optim::ParamGroup,
//!     scheduler::{OneCycleScheduler, Scheduler},
//! };
//!
//! let policy = OneCyclePolicy {
//!     num_batches: 200,
//!     annihilation_batches: 20,
//!     annihilation_divisor: 100.,
//!     max_lr: 1.,
//!     min_lr: 0.1,
//!     max_momentum: 0.99,
//!     min_momentum: 0.7,
//! };
//!
//! let mut scheduler = OneCycleScheduler::new(policy)?;
//! let mut optimizer = vec![ParamGroup::new(0.1, 0.99); 4];
//!
//! while scheduler.remaining() > 0 {
//!     scheduler.apply(&mut optimizer)?;
//!     // forward, backward, update the weights with `optimizer`'s hyperparameters
//! }
//!
//! assert_eq!(scheduler.position(), 220);
//! # Ok::<(), cyclic_lr::ScheduleErr>(())
//! ```

pub mod builder;
pub mod composer;
pub mod dataset;
pub mod error;
pub mod optim;
pub mod scheduler;
pub mod specs;
pub mod waveform;

pub use builder::SchedulerBuilder;
pub use error::{Result, ScheduleErr};
pub use scheduler::Scheduler;
pub use specs::SchedulerSpec;
