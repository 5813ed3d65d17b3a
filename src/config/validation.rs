//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// A zero PWM frequency is rejected because no platform can program it.
/// Duty values are not range-checked here: the duty scale is defined by
/// the platform hooks, not by this crate.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        if motor.freq_hz.value() == 0 {
            return Err(Error::Config(ConfigError::InvalidFrequency(0)));
        }
    }

    Ok(())
}
