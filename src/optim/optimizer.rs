/// The hyperparameters shared by one group of the model's parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamGroup {
    pub learning_rate: f32,
    pub momentum: f32,
}

impl ParamGroup {
    /// Creates a new `ParamGroup`.
    pub fn new(learning_rate: f32, momentum: f32) -> Self {
        Self {
            learning_rate,
            momentum,
        }
    }
}

/// Anything holding parameter groups whose hyperparameters a scheduler can rewrite.
///
/// The update rule itself lives in the training loop's optimizer, schedulers only
/// overwrite the hyperparameters of every group once per training step.
pub trait Optimizer {
    /// Returns the parameter groups so their hyperparameters can be rewritten.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];
}

impl Optimizer for [ParamGroup] {
    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        self
    }
}

impl Optimizer for Vec<ParamGroup> {
    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        self
    }
}
