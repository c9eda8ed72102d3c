mod optimizer;

pub use optimizer::{Optimizer, ParamGroup};
