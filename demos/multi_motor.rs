//! Example: Multi-motor configuration.
//!
//! This example demonstrates how to:
//! - Configure several motors in a single TOML file
//! - Load the file from disk with `load_config`
//! - Build one handle per axis and drive them independently
//!
//! Run with: `cargo run --example multi_motor`

use stepmotor::error::Result;
use stepmotor::{Direction, Duty, Hertz, MotorHal, StepMotor};

/// Per-axis hooks tagged with the axis key for readable output.
struct AxisHal {
    tag: String,
}

impl MotorHal for AxisHal {
    type Error = core::convert::Infallible;

    fn set_pwm_duty(&mut self, duty: Duty) -> core::result::Result<(), Self::Error> {
        println!("  [{}] duty -> {}", self.tag, duty.value());
        Ok(())
    }

    fn set_pwm_freq(&mut self, freq_hz: Hertz) -> core::result::Result<(), Self::Error> {
        println!("  [{}] frequency -> {} Hz", self.tag, freq_hz.value());
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> core::result::Result<(), Self::Error> {
        println!("  [{}] direction -> {:?}", self.tag, direction);
        Ok(())
    }

    fn start_pwm(&mut self) -> core::result::Result<(), Self::Error> {
        println!("  [{}] start", self.tag);
        Ok(())
    }

    fn stop_pwm(&mut self) -> core::result::Result<(), Self::Error> {
        println!("  [{}] stop", self.tag);
        Ok(())
    }
}

const TOML_CONTENT: &str = r#"
# X-axis: fast traverse
[motors.x_axis]
name = "X Axis"
direction = "cw"
freq_hz = 2000
duty = 0.5

# Y-axis: slower, reversed wiring
[motors.y_axis]
name = "Y Axis"
direction = "ccw"
freq_hz = 1500
duty = 0.35

# Z-axis: gentle vertical moves
[motors.z_axis]
name = "Z Axis"
direction = "cw"
freq_hz = 800
duty = 0.2
"#;

fn main() -> Result<()> {
    println!("=== Multi-Motor Configuration Example ===\n");

    // Round-trip the configuration through a real file
    let path = std::env::temp_dir().join("stepmotor_multi_motor.toml");
    std::fs::write(&path, TOML_CONTENT).expect("Failed to write demo config");
    let config = stepmotor::load_config(&path)?;
    let _ = std::fs::remove_file(&path);

    println!("Loaded configuration with {} motor(s)\n", config.len());

    // Build one handle per configured axis
    let mut motors = Vec::new();
    for key in config.motor_names() {
        let motor = StepMotor::builder()
            .from_config(&config, key)?
            .hal(AxisHal {
                tag: key.to_string(),
            })
            .build()?;
        motors.push(motor);
    }

    println!("Pushing configured values to each axis:");
    for motor in motors.iter_mut() {
        motor.set_frequency(motor.frequency())?;
        motor.set_duty(motor.duty())?;
        motor.set_direction(motor.direction())?;
    }

    println!("\nStarting all axes:");
    for motor in motors.iter_mut() {
        motor.start()?;
    }

    println!("\nAdjusting one axis mid-run:");
    if let Some(motor) = motors.iter_mut().find(|m| m.name() == "Y Axis") {
        motor.set_duty(Duty::new(0.8))?;
        motor.set_direction(motor.direction().toggled())?;
    }

    println!("\nStopping all axes:");
    for motor in motors.iter_mut().rev() {
        motor.stop()?;
    }

    println!("\nFinal mirrored state:");
    for motor in &motors {
        println!(
            "  {}: {} Hz, duty {}, {:?}, running: {}",
            motor.name(),
            motor.frequency().value(),
            motor.duty().value(),
            motor.direction(),
            motor.is_running()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
