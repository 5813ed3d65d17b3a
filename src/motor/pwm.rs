//! Ready-made platform hooks over embedded-hal 1.0.
//!
//! [`PwmMotor`] adapts a `SetDutyCycle` PWM channel plus an `OutputPin`
//! direction pin into a [`MotorHal`], so the driver runs on real hardware
//! without hand-written glue.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::{Duty, Hertz};

use super::direction::Direction;
use super::hal::MotorHal;

/// Failures reported by the [`PwmMotor`] hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmMotorError {
    /// The PWM peripheral rejected a duty cycle write.
    Duty,
    /// The direction pin rejected a level write.
    Pin,
    /// Frequency control is not available through `SetDutyCycle`.
    Frequency,
}

impl core::fmt::Display for PwmMotorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PwmMotorError::Duty => write!(f, "PWM peripheral rejected duty cycle write"),
            PwmMotorError::Pin => write!(f, "direction pin write failed"),
            PwmMotorError::Frequency => {
                write!(f, "frequency control not available through SetDutyCycle")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PwmMotorError {}

/// [`MotorHal`] implementation over embedded-hal 1.0 types.
///
/// Contract differences from bare timer hardware:
/// - Duty is interpreted as a fraction of `max_duty_cycle()` and clamped to
///   0.0–1.0. This adapter owns its duty range; the driver itself forwards
///   whatever was commanded.
/// - embedded-hal 1.0 has no channel enable/disable, so stop writes a zero
///   duty and start restores the last commanded raw duty. Duty commands
///   issued while stopped are cached and take effect on the next start.
/// - embedded-hal 1.0 exposes no frequency control; the frequency hook
///   always reports [`PwmMotorError::Frequency`]. Configure the timer
///   frequency when constructing the PWM channel.
///
/// Clockwise drives the direction pin high unless inverted via
/// [`invert_direction`](Self::invert_direction).
pub struct PwmMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    /// PWM channel carrying the step/speed signal.
    pwm: PWM,

    /// Direction pin.
    dir: DIR,

    /// Last commanded duty in raw peripheral units.
    raw_duty: u16,

    /// Whether the output is currently driven (start/stop emulation).
    active: bool,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,
}

impl<PWM, DIR> PwmMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    /// Create the adapter around a PWM channel and a direction pin.
    ///
    /// The output starts inactive with a zero duty cache.
    pub fn new(pwm: PWM, dir: DIR) -> Self {
        Self {
            pwm,
            dir,
            raw_duty: 0,
            active: false,
            invert_direction: false,
        }
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Whether the output is currently driven.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Consume the adapter and hand the peripherals back.
    pub fn into_parts(self) -> (PWM, DIR) {
        (self.pwm, self.dir)
    }

    fn raw_duty_for(&self, duty: Duty) -> u16 {
        let fraction = duty.value().clamp(0.0, 1.0);
        (fraction * f32::from(self.pwm.max_duty_cycle())) as u16
    }
}

impl<PWM, DIR> MotorHal for PwmMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    type Error = PwmMotorError;

    fn set_pwm_duty(&mut self, duty: Duty) -> Result<(), Self::Error> {
        let raw = self.raw_duty_for(duty);
        if self.active {
            self.pwm
                .set_duty_cycle(raw)
                .map_err(|_| PwmMotorError::Duty)?;
        }
        self.raw_duty = raw;
        Ok(())
    }

    fn set_pwm_freq(&mut self, _freq_hz: Hertz) -> Result<(), Self::Error> {
        Err(PwmMotorError::Frequency)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        let pin_high = match direction {
            Direction::Clockwise => !self.invert_direction,
            Direction::CounterClockwise => self.invert_direction,
        };

        if pin_high {
            self.dir.set_high().map_err(|_| PwmMotorError::Pin)
        } else {
            self.dir.set_low().map_err(|_| PwmMotorError::Pin)
        }
    }

    fn start_pwm(&mut self) -> Result<(), Self::Error> {
        self.pwm
            .set_duty_cycle(self.raw_duty)
            .map_err(|_| PwmMotorError::Duty)?;
        self.active = true;
        Ok(())
    }

    fn stop_pwm(&mut self) -> Result<(), Self::Error> {
        self.pwm
            .set_duty_cycle(0)
            .map_err(|_| PwmMotorError::Duty)?;
        self.active = false;
        Ok(())
    }
}
