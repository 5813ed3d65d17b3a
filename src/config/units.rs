//! Unit types for PWM quantities.
//!
//! Provides type-safe representations of PWM frequency and duty cycle so the
//! two cannot be swapped at a call site.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// PWM frequency in Hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hertz(pub u32);

impl Hertz {
    /// Create a new Hertz value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create from kilohertz.
    #[inline]
    pub const fn khz(value: u32) -> Self {
        Self(value * 1_000)
    }

    /// Create from megahertz.
    #[inline]
    pub const fn mhz(value: u32) -> Self {
        Self(value * 1_000_000)
    }

    /// Get the raw value in Hz.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// PWM period in microseconds, or `None` for 0 Hz.
    #[inline]
    pub const fn period_us(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(1_000_000 / self.0)
        }
    }
}

impl Add for Hertz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Hertz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// PWM duty cycle.
///
/// The numeric range is caller-defined (commonly 0.0–1.0 or 0–100); this crate
/// forwards duty values to the platform hooks verbatim and never clamps or
/// rescales them. Range interpretation belongs to the [`MotorHal`]
/// implementation.
///
/// [`MotorHal`]: crate::motor::MotorHal
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Duty(pub f32);

impl Duty {
    /// Create a new Duty value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Hertz.
    fn hz(self) -> Hertz;
}

impl UnitExt for u32 {
    #[inline]
    fn hz(self) -> Hertz {
        Hertz(self)
    }
}
