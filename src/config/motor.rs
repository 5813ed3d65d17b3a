//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::motor::Direction;

use super::units::{Duty, Hertz};

/// Policy for platform hook failures.
///
/// The hardware layer reports a status from every hook; historically this
/// driver discarded it, so `Ignore` is the default. Select `Propagate` to
/// surface hook failures as [`MotorError::HalError`].
///
/// [`MotorError::HalError`]: crate::error::MotorError::HalError
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Discard hook results (historic behavior).
    #[default]
    Ignore,
    /// Fail the operation when a hook reports an error.
    Propagate,
}

/// Complete motor configuration from TOML.
///
/// Applying a configuration fully overwrites the handle's state; there is no
/// partial merge.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Initial rotation direction (`"cw"` or `"ccw"`).
    #[serde(default)]
    pub direction: Direction,

    /// PWM frequency in Hz.
    pub freq_hz: Hertz,

    /// PWM duty cycle. Range is caller-defined and forwarded verbatim.
    pub duty: Duty,

    /// What to do when a platform hook reports failure.
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl MotorConfig {
    /// Create a configuration with the given name and default direction and
    /// error policy.
    pub fn new(name: &str, freq_hz: Hertz, duty: Duty) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            direction: Direction::default(),
            freq_hz,
            duty,
            on_error: ErrorPolicy::default(),
        }
    }
}
