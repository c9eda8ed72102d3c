use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the schedule crate.
pub type Result<T> = std::result::Result<T, ScheduleErr>;

/// Errors produced while building or driving a schedule.
#[derive(Debug)]
pub enum ScheduleErr {
    /// A construction parameter is out of its domain.
    InvalidParameter {
        /// The offending parameter (e.g. "batch_size", "step_sizes").
        what: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// The scheduler was advanced past the end of its sequence.
    Exhausted { len: usize },

    /// A scheduler description could not be parsed.
    Config(serde_json::Error),
}

impl ScheduleErr {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            what,
            reason: reason.into(),
        }
    }
}

impl Display for ScheduleErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleErr::InvalidParameter { what, reason } => {
                write!(f, "invalid parameter {what}: {reason}")
            }
            ScheduleErr::Exhausted { len } => {
                write!(f, "schedule exhausted after {len} steps")
            }
            ScheduleErr::Config(e) => write!(f, "invalid scheduler spec: {e}"),
        }
    }
}

impl Error for ScheduleErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScheduleErr::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScheduleErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}
