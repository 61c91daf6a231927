//! Frame-output side of the loop: star sprites, orientation compass and
//! the tick-rate readout.

pub mod compass;
pub mod fps;
pub mod starfield;

pub use compass::Compass;
pub use fps::FpsSampler;
pub use starfield::StarPool;
