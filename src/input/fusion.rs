//! Collapses keyboard, gamepad and touch readings into one value per axis.

use crate::config::{ControlBindings, PadMapping};
use crate::input::gamepad::AnalogPad;
use crate::input::state::InputState;
use crate::input::touch;
use crate::input::ControlQuery;

/// Analog axis magnitudes below this read as centered.
pub const PAD_DEADZONE: f32 = 0.1;

/// Fuses sampled device state into per-axis control values.
pub struct FusionEngine {
    bindings: ControlBindings,
}

impl FusionEngine {
    pub fn new(bindings: ControlBindings) -> Self {
        Self { bindings }
    }

    /// Produces exactly one value for `query`.
    ///
    /// Sources are consulted in strict precedence order and the first
    /// applicable one wins: digital keys, then a connected gamepad, then
    /// active touch contacts, then the resting value.
    pub fn fuse(
        &self,
        query: &ControlQuery,
        input: &InputState,
        pad: Option<&dyn AnalogPad>,
    ) -> f32 {
        let mapping = self.bindings.entry(query.axis);
        let lo_held = input.is_pressed(&mapping.keys.0);
        let hi_held = input.is_pressed(&mapping.keys.1);

        if lo_held && hi_held {
            // Conflicting keys cancel.
            return query.normal;
        }
        if lo_held {
            return query.lo;
        }
        if hi_held {
            return query.hi;
        }
        if let Some(pad) = pad {
            return scale_toward(query, pad_strength(mapping.pad, pad));
        }
        if !input.touches().is_empty() {
            let strength = touch::gesture_strength(input.touches(), mapping.gesture);
            return scale_toward(query, strength);
        }
        query.normal
    }
}

/// Reads the configured gamepad binding as a strength in [-1, 1].
fn pad_strength(mapping: PadMapping, pad: &dyn AnalogPad) -> f32 {
    match mapping {
        PadMapping::Axis(index) => {
            let raw = pad.axis(index);
            if raw.abs() < PAD_DEADZONE {
                0.0
            } else if index % 2 == 0 {
                raw
            } else {
                // Odd indices are the vertical stick axes, which report
                // positive-down; flip so positive strength pulls toward hi.
                -raw
            }
        }
        PadMapping::Buttons(lo, hi) => pad.button(hi) - pad.button(lo),
    }
}

/// Interpolates from `normal` toward `lo` (negative strength) or `hi`
/// (positive strength).
fn scale_toward(query: &ControlQuery, strength: f32) -> f32 {
    if strength < 0.0 {
        query.normal + (query.normal - query.lo) * strength
    } else if strength > 0.0 {
        query.normal + (query.hi - query.normal) * strength
    } else {
        query.normal
    }
}
