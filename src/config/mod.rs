//! Configuration module for stepmotor.
//!
//! Provides types for describing and validating motor configurations
//! from TOML files (with `std` feature) or pre-built data.

mod motor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{ErrorPolicy, MotorConfig};
pub use system::{SystemConfig, MAX_MOTORS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Duty, Hertz};
