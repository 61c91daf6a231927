//! Static control mapping table and its TOML persistence.
//!
//! The table binds each logical axis to a keyboard key pair, a gamepad
//! binding and a touch gesture. It is loaded once at startup; a missing or
//! malformed entry is a configuration bug and aborts the program rather
//! than silently defaulting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::input::{Axis, ControlError, Gesture};

/// Gamepad binding for one axis: either a raw analog axis index or a pair
/// of analog button indices (low, high). Serialized as a bare integer or a
/// two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PadMapping {
    Axis(usize),
    Buttons(usize, usize),
}

/// Device bindings for a single axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMapping {
    /// Digital key pair, lowercase: (lo key, hi key).
    pub keys: (String, String),
    pub pad: PadMapping,
    pub gesture: Gesture,
}

/// The full mapping table, keyed by logical axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlMappings {
    axes: HashMap<Axis, AxisMapping>,
}

impl ControlMappings {
    /// The built-in table: WASD-style keys, left stick for pitch/yaw, right
    /// stick x for roll, analog triggers for speed.
    pub fn default_config() -> Self {
        let mut axes = HashMap::new();
        axes.insert(
            Axis::Pitch,
            AxisMapping {
                keys: ("s".into(), "w".into()),
                pad: PadMapping::Axis(1),
                gesture: Gesture::DragVert,
            },
        );
        axes.insert(
            Axis::Yaw,
            AxisMapping {
                keys: ("a".into(), "d".into()),
                pad: PadMapping::Axis(0),
                gesture: Gesture::DragHoriz,
            },
        );
        axes.insert(
            Axis::Roll,
            AxisMapping {
                keys: ("q".into(), "e".into()),
                pad: PadMapping::Axis(2),
                gesture: Gesture::Rotate,
            },
        );
        axes.insert(
            Axis::Speed,
            AxisMapping {
                keys: ("c".into(), "shift".into()),
                pad: PadMapping::Buttons(6, 7),
                gesture: Gesture::Plane,
            },
        );
        Self { axes }
    }

    /// Every axis must be bound.
    pub fn validate(&self) -> Result<(), ControlError> {
        for axis in Axis::ALL {
            if !self.axes.contains_key(&axis) {
                return Err(ControlError::MissingAxis(axis));
            }
        }
        Ok(())
    }

    pub fn entry(&self, axis: Axis) -> Result<&AxisMapping, ControlError> {
        self.axes.get(&axis).ok_or(ControlError::MissingAxis(axis))
    }

    /// Resolves the table into per-axis entries held by value, so per-frame
    /// lookups cannot fail after startup.
    pub fn resolve(&self) -> Result<ControlBindings, ControlError> {
        Ok(ControlBindings {
            pitch: self.entry(Axis::Pitch)?.clone(),
            yaw: self.entry(Axis::Yaw)?.clone(),
            roll: self.entry(Axis::Roll)?.clone(),
            speed: self.entry(Axis::Speed)?.clone(),
        })
    }
}

/// Mapping entries resolved once at startup.
#[derive(Debug, Clone)]
pub struct ControlBindings {
    pitch: AxisMapping,
    yaw: AxisMapping,
    roll: AxisMapping,
    speed: AxisMapping,
}

impl ControlBindings {
    pub fn entry(&self, axis: Axis) -> &AxisMapping {
        match axis {
            Axis::Pitch => &self.pitch,
            Axis::Yaw => &self.yaw,
            Axis::Roll => &self.roll,
            Axis::Speed => &self.speed,
        }
    }
}

/// Location of the user mapping file.
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("starflight").join("controls.toml"))
}

/// Writes the built-in table on first run so users have a file to edit.
/// Failure to write is only a warning; the built-in table still applies.
pub fn ensure_default_file() {
    let Some(path) = config_file() else {
        return;
    };
    if path.exists() {
        return;
    }
    let rendered = match toml::to_string_pretty(&ControlMappings::default_config()) {
        Ok(text) => text,
        Err(e) => {
            warn!("could not render default mappings: {}", e);
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("could not create {}: {}", parent.display(), e);
            return;
        }
    }
    match fs::write(&path, rendered) {
        Ok(_) => info!("wrote default control mappings to {}", path.display()),
        Err(e) => warn!("could not write {}: {}", path.display(), e),
    }
}

/// Loads the mapping table from disk, falling back to the built-in table
/// when no file exists. A file that fails to parse or validate aborts
/// startup.
pub fn load_or_default() -> Result<ControlMappings, ControlError> {
    let Some(path) = config_file() else {
        return Ok(ControlMappings::default_config());
    };
    if !path.exists() {
        info!("no control mapping file, using built-in defaults");
        return Ok(ControlMappings::default_config());
    }
    let text = fs::read_to_string(&path)
        .map_err(|e| ControlError::ConfigError(format!("{}: {}", path.display(), e)))?;
    let mappings: ControlMappings = toml::from_str(&text)
        .map_err(|e| ControlError::ConfigError(format!("{}: {}", path.display(), e)))?;
    mappings.validate()?;
    info!("loaded control mappings from {}", path.display());
    Ok(mappings)
}
