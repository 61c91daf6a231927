//! Gamepad sampling through gilrs.

use gilrs::{Axis, Button, Gamepad, Gilrs};
use tracing::{debug, info};

use crate::input::ControlError;

/// Read-only view of one analog input device, addressed by the standard
/// gamepad layout (axes 0..=3 are the sticks, buttons 6 and 7 the analog
/// triggers).
pub trait AnalogPad {
    /// Raw axis value in [-1, 1]; unmapped indices read 0.
    fn axis(&self, index: usize) -> f32;

    /// Analog button value in [0, 1]; unmapped indices read 0.
    fn button(&self, index: usize) -> f32;
}

/// Polls gilrs and exposes the first connected gamepad each frame.
pub struct GamepadSampler {
    gilrs: Gilrs,
}

impl GamepadSampler {
    pub fn new() -> Result<Self, ControlError> {
        let gilrs = Gilrs::new().map_err(|e| ControlError::GamepadError(e.to_string()))?;
        for (id, gamepad) in gilrs.gamepads() {
            info!("gamepad {}: {}", id, gamepad.name());
        }
        Ok(Self { gilrs })
    }

    /// Drains pending gilrs events so the cached gamepad state is current.
    pub fn poll(&mut self) {
        while let Some(event) = self.gilrs.next_event() {
            debug!("gamepad event: {:?}", event.event);
        }
    }

    /// Selects the first connected gamepad, lowest id first.
    ///
    /// Re-evaluated every frame with no persistence; a pad that hot-plugs
    /// ahead of the current one takes over silently.
    pub fn active_pad(&self) -> Option<GilrsPad<'_>> {
        self.gilrs
            .gamepads()
            .find(|(_, gamepad)| gamepad.is_connected())
            .map(|(_, gamepad)| GilrsPad { gamepad })
    }
}

/// [`AnalogPad`] over a connected gilrs gamepad.
pub struct GilrsPad<'a> {
    gamepad: Gamepad<'a>,
}

impl AnalogPad for GilrsPad<'_> {
    fn axis(&self, index: usize) -> f32 {
        let Some(axis) = standard_axis(index) else {
            return 0.0;
        };
        let value = self
            .gamepad
            .axis_data(axis)
            .map(|data| data.value())
            .unwrap_or(0.0);
        // gilrs reports stick y positive-up; the standard layout the mapping
        // table is written against is positive-down.
        if matches!(index, 1 | 3) {
            -value
        } else {
            value
        }
    }

    fn button(&self, index: usize) -> f32 {
        match standard_button(index) {
            Some(button) => self
                .gamepad
                .button_data(button)
                .map(|data| data.value())
                .unwrap_or(0.0),
            None => 0.0,
        }
    }
}

fn standard_axis(index: usize) -> Option<Axis> {
    match index {
        0 => Some(Axis::LeftStickX),
        1 => Some(Axis::LeftStickY),
        2 => Some(Axis::RightStickX),
        3 => Some(Axis::RightStickY),
        _ => None,
    }
}

fn standard_button(index: usize) -> Option<Button> {
    match index {
        0 => Some(Button::South),
        1 => Some(Button::East),
        2 => Some(Button::West),
        3 => Some(Button::North),
        4 => Some(Button::LeftTrigger),
        5 => Some(Button::RightTrigger),
        6 => Some(Button::LeftTrigger2),
        7 => Some(Button::RightTrigger2),
        _ => None,
    }
}
