//! Example: Configuration-driven motor control.
//!
//! This example demonstrates how to:
//! - Parse a motor configuration from TOML
//! - Build motor handles by configured name
//! - Surface or ignore platform hook failures via `on_error`
//!
//! Run with: `cargo run --example config_driven`

use stepmotor::error::Result;
use stepmotor::{Duty, Hertz, MotorHal, StepMotor};

/// Hooks for a platform whose PWM timer runs at a fixed frequency.
///
/// Duty, direction and start/stop work; frequency writes are rejected.
struct FixedFreqHal;

impl MotorHal for FixedFreqHal {
    type Error = &'static str;

    fn set_pwm_duty(&mut self, duty: Duty) -> core::result::Result<(), Self::Error> {
        println!("  [hal] duty -> {}", duty.value());
        Ok(())
    }

    fn set_pwm_freq(&mut self, _freq_hz: Hertz) -> core::result::Result<(), Self::Error> {
        Err("frequency is fixed on this platform")
    }

    fn set_direction(
        &mut self,
        direction: stepmotor::Direction,
    ) -> core::result::Result<(), Self::Error> {
        println!("  [hal] direction -> {:?}", direction);
        Ok(())
    }

    fn start_pwm(&mut self) -> core::result::Result<(), Self::Error> {
        println!("  [hal] start");
        Ok(())
    }

    fn stop_pwm(&mut self) -> core::result::Result<(), Self::Error> {
        println!("  [hal] stop");
        Ok(())
    }
}

const TOML_CONTENT: &str = r#"
# Conveyor surfaces hook failures; agitator keeps the historic
# fire-and-forget behavior.

[motors.conveyor]
name = "Conveyor Belt"
direction = "cw"
freq_hz = 2000
duty = 0.4
on_error = "propagate"

[motors.agitator]
name = "Agitator"
direction = "ccw"
freq_hz = 800
duty = 0.65
"#;

fn main() -> Result<()> {
    println!("=== Configuration-Driven Motor Example ===\n");

    let config = stepmotor::parse_config(TOML_CONTENT)?;

    println!("Loaded {} motor(s):", config.len());
    for key in config.motor_names() {
        let motor = config.motor(key).expect("listed name should resolve");
        println!(
            "  {}: \"{}\", {} Hz, duty {}, on_error {:?}",
            key,
            motor.name,
            motor.freq_hz.value(),
            motor.duty.value(),
            motor.on_error
        );
    }

    // The conveyor propagates hook failures.
    let mut conveyor = StepMotor::builder()
        .from_config(&config, "conveyor")?
        .hal(FixedFreqHal)
        .build()?;

    println!("\nDriving '{}':", conveyor.name());
    conveyor.set_duty(conveyor.duty())?;
    conveyor.start()?;

    match conveyor.set_frequency(Hertz::khz(4)) {
        Ok(()) => println!("  frequency change accepted"),
        Err(e) => println!("  frequency change rejected: {}", e),
    }
    println!(
        "  mirror still reports the configured {} Hz",
        conveyor.frequency().value()
    );
    conveyor.stop()?;

    // The agitator ignores hook failures.
    let mut agitator = StepMotor::builder()
        .from_config(&config, "agitator")?
        .hal(FixedFreqHal)
        .build()?;

    println!("\nDriving '{}':", agitator.name());
    agitator.start()?;
    agitator.set_frequency(Hertz::khz(4))?;
    println!(
        "  frequency call reported success; mirror now records {} Hz",
        agitator.frequency().value()
    );
    agitator.stop()?;

    println!("\n=== Example Complete ===");
    Ok(())
}
