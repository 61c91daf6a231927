//! Control input layer: device sampling, gesture interpretation and fusion.
//!
//! Keyboard, gamepad and touch readings are collapsed into one continuous
//! value per logical axis (`Axis`). Sampling is split per device family:
//! [`state::InputState`] tracks keyboard and touch events, [`gamepad`] polls
//! gilrs, and [`fusion::FusionEngine`] combines the sampled state under a
//! strict precedence order (digital keys, then gamepad, then touch, then the
//! resting value).

pub mod error;
pub mod fusion;
pub mod gamepad;
pub mod state;
pub mod touch;

pub use error::ControlError;
pub use fusion::FusionEngine;
pub use gamepad::{AnalogPad, GamepadSampler};
pub use state::{InputState, TouchPoint};
pub use touch::Gesture;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical control channels driven by the fusion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Pitch,
    Yaw,
    Roll,
    Speed,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Pitch, Axis::Yaw, Axis::Roll, Axis::Speed];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Pitch => write!(f, "pitch"),
            Axis::Yaw => write!(f, "yaw"),
            Axis::Roll => write!(f, "roll"),
            Axis::Speed => write!(f, "speed"),
        }
    }
}

/// One per-frame request for a fused control value.
///
/// `lo` and `hi` are the outputs when the corresponding digital key is held
/// and `normal` is the resting value. `lo > hi` is legal; per-axis sign
/// conventions live in these constants, not in the fusion rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlQuery {
    pub axis: Axis,
    pub lo: f32,
    pub hi: f32,
    pub normal: f32,
}
