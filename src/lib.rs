//! # stepmotor
//!
//! Handle-based PWM step motor driver with pluggable platform hooks and
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Handle-based**: one `StepMotor` per physical motor, no global state
//! - **Pluggable hooks**: all hardware access goes through a `MotorHal` supplied by the caller
//! - **Configuration-driven**: define motors in TOML files
//! - **embedded-hal 1.0**: ready-made `PwmMotor` hooks over `SetDutyCycle` + `OutputPin`
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepmotor::{Duty, PwmMotor, StepMotor, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = stepmotor::load_config("motors.toml")?;
//!
//! // Wire platform hooks (here: embedded-hal 1.0 PWM channel + GPIO pin)
//! let mut motor = StepMotor::builder()
//!     .from_config(&config, "x_axis")?
//!     .hal(PwmMotor::new(pwm_channel, dir_pin))
//!     .build()?;
//!
//! // Drive it
//! motor.start()?;
//! motor.set_duty(Duty::new(0.75))?;
//! motor.stop()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, ErrorPolicy, MotorConfig, SystemConfig};
pub use error::{Error, Result};
pub use motor::{Direction, MotorHal, PwmMotor, StepMotor, StepMotorBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Duty, Hertz};
