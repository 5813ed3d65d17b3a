//! Motor module for stepmotor.
//!
//! Provides the handle-based PWM step motor driver, its platform hook
//! interface and a ready-made embedded-hal 1.0 hook implementation.

mod builder;
mod direction;
mod driver;
mod hal;
mod pwm;

pub use builder::StepMotorBuilder;
pub use direction::Direction;
pub use driver::StepMotor;
pub use hal::MotorHal;
pub use pwm::{PwmMotor, PwmMotorError};
