pub mod height;
pub mod measurement;
pub mod photonic;
pub mod rref;
pub mod synth;

pub use height::{emitter_count, height};
pub use measurement::measure_all;
pub use photonic::synthesize_photonic_protocol;
pub use rref::rref;
pub use synth::synthesize;
