//! Motor rotation direction.

use serde::Deserialize;

use crate::error::ConfigError;

/// Rotation direction, carried as a small integer code.
///
/// The discriminants are the wire codes handed to
/// [`MotorHal::set_direction`](crate::motor::MotorHal::set_direction)
/// implementations that talk to register-level APIs. Clockwise is the
/// zero-initialized default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Clockwise rotation (code 0).
    #[default]
    #[serde(rename = "cw")]
    Clockwise = 0,
    /// Counter-clockwise rotation (code 1).
    #[serde(rename = "ccw")]
    CounterClockwise = 1,
}

impl Direction {
    /// Get the raw direction code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Create from a raw direction code.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDirection` for any code other than 0 or 1.
    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(Direction::Clockwise),
            1 => Ok(Direction::CounterClockwise),
            other => Err(ConfigError::InvalidDirection(other)),
        }
    }

    /// Get the opposite direction.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
