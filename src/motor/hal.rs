//! Platform hook interface.
//!
//! The driver performs no hardware access of its own. Every state-changing
//! operation is forwarded to a [`MotorHal`] implementation supplied by the
//! caller: typically a thin shim over a timer/PWM peripheral and a GPIO
//! direction pin.

use core::fmt::Debug;

use crate::config::units::{Duty, Hertz};

use super::direction::Direction;

/// The set of platform hooks a step motor needs.
///
/// One method per capability. Implementations own the actual hardware state;
/// the driver only coordinates calls and mirrors the commanded values.
///
/// Hook results are discarded by the driver unless the motor is configured
/// with [`ErrorPolicy::Propagate`](crate::config::ErrorPolicy::Propagate).
pub trait MotorHal {
    /// Hook error type. Use `core::convert::Infallible` for hooks that
    /// cannot fail.
    type Error: Debug;

    /// Set the PWM duty cycle.
    ///
    /// The duty range is an implementation contract (0.0–1.0 and 0–100 are
    /// both common); the driver forwards whatever the caller commanded.
    fn set_pwm_duty(&mut self, duty: Duty) -> Result<(), Self::Error>;

    /// Set the PWM frequency.
    fn set_pwm_freq(&mut self, freq_hz: Hertz) -> Result<(), Self::Error>;

    /// Set the rotation direction.
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;

    /// Enable the PWM output.
    fn start_pwm(&mut self) -> Result<(), Self::Error>;

    /// Disable the PWM output.
    fn stop_pwm(&mut self) -> Result<(), Self::Error>;
}

impl<T: MotorHal> MotorHal for &mut T {
    type Error = T::Error;

    fn set_pwm_duty(&mut self, duty: Duty) -> Result<(), Self::Error> {
        T::set_pwm_duty(self, duty)
    }

    fn set_pwm_freq(&mut self, freq_hz: Hertz) -> Result<(), Self::Error> {
        T::set_pwm_freq(self, freq_hz)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        T::set_direction(self, direction)
    }

    fn start_pwm(&mut self) -> Result<(), Self::Error> {
        T::start_pwm(self)
    }

    fn stop_pwm(&mut self) -> Result<(), Self::Error> {
        T::stop_pwm(self)
    }
}
