//! Error definitions for the control input layer.

use thiserror::Error;

use crate::input::Axis;

/// Error types for control configuration and device sampling.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Control mapping file could not be read or parsed
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// An axis is missing from the mapping table
    #[error("no control mapping configured for axis: {0}")]
    MissingAxis(Axis),

    /// The gamepad backend could not be initialized
    #[error("gamepad backend error: {0}")]
    GamepadError(String),
}
