//! Builder pattern for StepMotor.

use crate::config::units::{Duty, Hertz};
use crate::config::{ErrorPolicy, MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::direction::Direction;
use super::driver::StepMotor;
use super::hal::MotorHal;

/// Builder for creating configured [`StepMotor`] instances.
///
/// Fields can be set one by one or pulled from a [`MotorConfig`] /
/// [`SystemConfig`]; `build()` returns a handle that is already configured,
/// so control operations work immediately.
pub struct StepMotorBuilder<D: MotorHal> {
    hal: Option<D>,
    name: Option<heapless::String<32>>,
    direction: Direction,
    freq_hz: Option<Hertz>,
    duty: Option<Duty>,
    on_error: ErrorPolicy,
}

impl<D: MotorHal> Default for StepMotorBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: MotorHal> StepMotorBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            hal: None,
            name: None,
            direction: Direction::Clockwise,
            freq_hz: None,
            duty: None,
            on_error: ErrorPolicy::Ignore,
        }
    }

    /// Set the platform hooks.
    pub fn hal(mut self, hal: D) -> Self {
        self.hal = Some(hal);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the initial rotation direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the PWM frequency.
    pub fn freq_hz(mut self, freq_hz: Hertz) -> Self {
        self.freq_hz = Some(freq_hz);
        self
    }

    /// Set the PWM duty cycle.
    pub fn duty(mut self, duty: Duty) -> Self {
        self.duty = Some(duty);
        self
    }

    /// Set the hook failure policy.
    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.direction = config.direction;
        self.freq_hz = Some(config.freq_hz);
        self.duty = Some(config.duty);
        self.on_error = config.on_error;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build a configured StepMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if the hal, frequency or duty is missing.
    pub fn build(self) -> Result<StepMotor<D>> {
        let hal = self.hal.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("hal is required").unwrap(),
            ))
        })?;

        let freq_hz = self.freq_hz.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("freq_hz is required").unwrap(),
            ))
        })?;

        let duty = self.duty.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("duty is required").unwrap(),
            ))
        })?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap());

        let config = MotorConfig {
            name,
            direction: self.direction,
            freq_hz,
            duty,
            on_error: self.on_error,
        };

        let mut motor = StepMotor::new(hal);
        motor.set_config(&config);
        Ok(motor)
    }
}
