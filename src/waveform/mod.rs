mod cosine;
mod kind;
mod linear;
mod triangular;
mod waveform;

pub use cosine::Cosine;
pub use kind::WaveformKind;
pub use linear::{LinearDecrease, LinearIncrease};
pub use triangular::{ReverseTriangular, Triangular};
pub use waveform::Waveform;

pub(crate) use waveform::linspace;
