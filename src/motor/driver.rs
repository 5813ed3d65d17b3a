//! Step motor handle.
//!
//! Stores the commanded PWM state and forwards control operations to the
//! injected platform hooks.

use heapless::String;

use crate::config::units::{Duty, Hertz};
use crate::config::{ErrorPolicy, MotorConfig};
use crate::error::{Error, MotorError, Result};

use super::builder::StepMotorBuilder;
use super::direction::Direction;
use super::hal::MotorHal;

/// Handle for one step motor driven over PWM.
///
/// The handle owns the platform hooks (`D`) for its whole life and mirrors
/// the last direction, frequency and duty cycle it forwarded to them. The
/// mirror is a record of what was commanded, not a readback of hardware
/// state.
///
/// A freshly created handle is unconfigured: every control operation fails
/// with [`MotorError::NotConfigured`] and touches no hook until
/// [`set_config`](Self::set_config) has been applied.
#[derive(Debug)]
pub struct StepMotor<D: MotorHal> {
    /// Injected platform hooks.
    hal: D,

    /// Motor name for logging/debugging.
    name: String<32>,

    /// Last direction forwarded to the hooks.
    direction: Direction,

    /// Last PWM frequency forwarded to the hooks.
    freq_hz: Hertz,

    /// Last duty cycle forwarded to the hooks.
    duty: Duty,

    /// Whether PWM output is currently enabled.
    running: bool,

    /// Whether a configuration has been applied.
    configured: bool,

    /// How hook failures are handled.
    on_error: ErrorPolicy,
}

impl<D: MotorHal> StepMotor<D> {
    /// Create an unconfigured handle around the given platform hooks.
    pub fn new(hal: D) -> Self {
        Self {
            hal,
            name: String::new(),
            direction: Direction::default(),
            freq_hz: Hertz::default(),
            duty: Duty::default(),
            running: false,
            configured: false,
            on_error: ErrorPolicy::default(),
        }
    }

    /// Create a builder for a configured handle.
    pub fn builder() -> StepMotorBuilder<D> {
        StepMotorBuilder::new()
    }

    /// Apply a configuration to the handle.
    ///
    /// Copies name, direction, frequency, duty and error policy into the
    /// handle, forces the run state to stopped and marks the handle
    /// configured. No hook is invoked: the stored values reach the platform
    /// on the next control operation. Re-applying overwrites the previous
    /// configuration completely.
    pub fn set_config(&mut self, config: &MotorConfig) {
        self.name = config.name.clone();
        self.direction = config.direction;
        self.freq_hz = config.freq_hz;
        self.duty = config.duty;
        self.on_error = config.on_error;
        self.running = false;
        self.configured = true;
    }

    /// Platform preparation step.
    ///
    /// Currently only enforces the configured-handle guard; kept as a
    /// distinct call so bring-up sequences read the same on platforms that
    /// need a real prepare stage.
    pub fn prepare(&mut self) -> Result<()> {
        self.ensure_configured()
    }

    /// Enable PWM output.
    ///
    /// The start hook is invoked unconditionally, so starting a running
    /// motor re-issues the start to the platform.
    pub fn start(&mut self) -> Result<()> {
        self.ensure_configured()?;
        let result = self.hal.start_pwm();
        self.apply_policy(result)?;
        self.running = true;
        Ok(())
    }

    /// Disable PWM output.
    ///
    /// Unconditional, like [`start`](Self::start): stopping a stopped motor
    /// re-issues the stop to the platform.
    pub fn stop(&mut self) -> Result<()> {
        self.ensure_configured()?;
        let result = self.hal.stop_pwm();
        self.apply_policy(result)?;
        self.running = false;
        Ok(())
    }

    /// Set the PWM duty cycle.
    ///
    /// The value is forwarded to the duty hook verbatim, including 0.0,
    /// negative and out-of-range values; range interpretation belongs to
    /// the hooks.
    pub fn set_duty(&mut self, duty: Duty) -> Result<()> {
        self.ensure_configured()?;
        let result = self.hal.set_pwm_duty(duty);
        self.apply_policy(result)?;
        self.duty = duty;
        Ok(())
    }

    /// Set the PWM frequency.
    pub fn set_frequency(&mut self, freq_hz: Hertz) -> Result<()> {
        self.ensure_configured()?;
        let result = self.hal.set_pwm_freq(freq_hz);
        self.apply_policy(result)?;
        self.freq_hz = freq_hz;
        Ok(())
    }

    /// Set the rotation direction.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.ensure_configured()?;
        let result = self.hal.set_direction(direction);
        self.apply_policy(result)?;
        self.direction = direction;
        Ok(())
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the last commanded direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the last commanded PWM frequency.
    #[inline]
    pub fn frequency(&self) -> Hertz {
        self.freq_hz
    }

    /// Get the last commanded duty cycle.
    #[inline]
    pub fn duty(&self) -> Duty {
        self.duty
    }

    /// Whether PWM output is currently enabled.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a configuration has been applied.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Get the hook failure policy.
    #[inline]
    pub fn error_policy(&self) -> ErrorPolicy {
        self.on_error
    }

    /// Get mutable access to the platform hooks.
    #[inline]
    pub fn hal_mut(&mut self) -> &mut D {
        &mut self.hal
    }

    /// Consume the handle and hand the platform hooks back.
    pub fn into_inner(self) -> D {
        self.hal
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.configured {
            Ok(())
        } else {
            Err(Error::Motor(MotorError::NotConfigured))
        }
    }

    /// Apply the handle's error policy to a hook result.
    ///
    /// Under `Ignore` the result is discarded; under `Propagate` a hook
    /// failure surfaces as [`MotorError::HalError`] before the mirror is
    /// written, leaving the stored state untouched.
    fn apply_policy<E>(&self, result: core::result::Result<(), E>) -> Result<()> {
        match self.on_error {
            ErrorPolicy::Ignore => Ok(()),
            ErrorPolicy::Propagate => result.map_err(|_| Error::Motor(MotorError::HalError)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::UnitExt;

    #[derive(Debug, Default)]
    struct RecordingHal {
        duty: Option<f32>,
        freq: Option<u32>,
        direction: Option<u8>,
        starts: usize,
        stops: usize,
        fail: bool,
    }

    impl MotorHal for RecordingHal {
        type Error = ();

        fn set_pwm_duty(&mut self, duty: Duty) -> core::result::Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.duty = Some(duty.value());
            Ok(())
        }

        fn set_pwm_freq(&mut self, freq_hz: Hertz) -> core::result::Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.freq = Some(freq_hz.value());
            Ok(())
        }

        fn set_direction(&mut self, direction: Direction) -> core::result::Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.direction = Some(direction.code());
            Ok(())
        }

        fn start_pwm(&mut self) -> core::result::Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.starts += 1;
            Ok(())
        }

        fn stop_pwm(&mut self) -> core::result::Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.stops += 1;
            Ok(())
        }
    }

    fn test_config() -> MotorConfig {
        MotorConfig::new("Test Motor", 1_000.hz(), Duty::new(0.5))
    }

    fn configured_motor() -> StepMotor<RecordingHal> {
        let mut motor = StepMotor::new(RecordingHal::default());
        motor.set_config(&test_config());
        motor
    }

    #[test]
    fn test_new_is_unconfigured_and_stopped() {
        let motor = StepMotor::new(RecordingHal::default());
        assert!(!motor.is_configured());
        assert!(!motor.is_running());
        assert_eq!(motor.name(), "");
        assert_eq!(motor.direction(), Direction::Clockwise);
        assert_eq!(motor.frequency().value(), 0);
        assert_eq!(motor.duty().value(), 0.0);
    }

    #[test]
    fn test_unconfigured_operations_fail_without_touching_hooks() {
        let mut motor = StepMotor::new(RecordingHal::default());
        let not_configured = Err(Error::Motor(MotorError::NotConfigured));

        assert_eq!(motor.prepare(), not_configured);
        assert_eq!(motor.start(), not_configured);
        assert_eq!(motor.stop(), not_configured);
        assert_eq!(motor.set_duty(Duty::new(0.5)), not_configured);
        assert_eq!(motor.set_frequency(1_000.hz()), not_configured);
        assert_eq!(motor.set_direction(Direction::CounterClockwise), not_configured);

        let hal = motor.into_inner();
        assert_eq!(hal.starts, 0);
        assert_eq!(hal.stops, 0);
        assert_eq!(hal.duty, None);
        assert_eq!(hal.freq, None);
        assert_eq!(hal.direction, None);
    }

    #[test]
    fn test_set_config_copies_fields_and_forces_stop() {
        let mut motor = configured_motor();
        motor.start().unwrap();
        assert!(motor.is_running());

        // Reconfiguring never touches the hooks, only the stored state.
        motor.set_config(&test_config());
        assert!(!motor.is_running());
        assert!(motor.is_configured());
        assert_eq!(motor.name(), "Test Motor");
        assert_eq!(motor.frequency().value(), 1_000);
        assert_eq!(motor.duty().value(), 0.5);

        let hal = motor.into_inner();
        assert_eq!(hal.stops, 0);
        assert_eq!(hal.duty, None);
    }

    #[test]
    fn test_operations_invoke_hook_then_mirror() {
        let mut motor = configured_motor();

        motor.set_duty(Duty::new(0.75)).unwrap();
        assert_eq!(motor.duty().value(), 0.75);

        motor.set_frequency(2_500.hz()).unwrap();
        assert_eq!(motor.frequency().value(), 2_500);

        motor.set_direction(Direction::CounterClockwise).unwrap();
        assert_eq!(motor.direction(), Direction::CounterClockwise);

        motor.start().unwrap();
        assert!(motor.is_running());
        motor.stop().unwrap();
        assert!(!motor.is_running());

        let hal = motor.into_inner();
        assert_eq!(hal.duty, Some(0.75));
        assert_eq!(hal.freq, Some(2_500));
        assert_eq!(hal.direction, Some(1));
        assert_eq!(hal.starts, 1);
        assert_eq!(hal.stops, 1);
    }

    #[test]
    fn test_start_twice_reinvokes_hook() {
        let mut motor = configured_motor();
        motor.start().unwrap();
        motor.start().unwrap();
        assert!(motor.is_running());
        assert_eq!(motor.into_inner().starts, 2);
    }

    #[test]
    fn test_duty_passes_through_unclamped() {
        let mut motor = configured_motor();
        motor.set_duty(Duty::new(-2.0)).unwrap();
        assert_eq!(motor.duty().value(), -2.0);
        assert_eq!(motor.into_inner().duty, Some(-2.0));
    }

    #[test]
    fn test_ignore_policy_discards_hook_failure() {
        let mut motor = configured_motor();
        motor.hal_mut().fail = true;

        // Failures are invisible and the mirror updates as if they succeeded.
        motor.set_duty(Duty::new(0.9)).unwrap();
        assert_eq!(motor.duty().value(), 0.9);
        motor.start().unwrap();
        assert!(motor.is_running());
    }

    #[test]
    fn test_propagate_policy_surfaces_failure_and_keeps_mirror() {
        let mut config = test_config();
        config.on_error = ErrorPolicy::Propagate;

        let mut motor = StepMotor::new(RecordingHal::default());
        motor.set_config(&config);
        motor.hal_mut().fail = true;

        assert_eq!(
            motor.set_duty(Duty::new(0.9)),
            Err(Error::Motor(MotorError::HalError))
        );
        assert_eq!(motor.duty().value(), 0.5);

        assert_eq!(motor.start(), Err(Error::Motor(MotorError::HalError)));
        assert!(!motor.is_running());

        motor.hal_mut().fail = false;
        motor.set_duty(Duty::new(0.9)).unwrap();
        assert_eq!(motor.duty().value(), 0.9);
    }

    #[test]
    fn test_hal_borrowed_by_mut_ref() {
        let mut hal = RecordingHal::default();
        {
            let mut motor = StepMotor::new(&mut hal);
            motor.set_config(&test_config());
            motor.start().unwrap();
        }
        assert_eq!(hal.starts, 1);
    }
}
