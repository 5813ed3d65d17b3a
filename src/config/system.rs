//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};

use serde::Deserialize;

use super::motor::MotorConfig;

/// Maximum number of motors in a system configuration.
pub const MAX_MOTORS: usize = 8;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named motor configurations.
    pub motors: FnvIndexMap<String<32>, MotorConfig, MAX_MOTORS>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Check if a motor name exists in the configuration.
    pub fn has_motor(&self, name: &str) -> bool {
        self.motor(name).is_some()
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }

    /// Number of configured motors.
    pub fn len(&self) -> usize {
        self.motors.len()
    }

    /// Check if no motors are configured.
    pub fn is_empty(&self) -> bool {
        self.motors.is_empty()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            motors: FnvIndexMap::new(),
        }
    }
}
