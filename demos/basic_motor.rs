//! Basic motor control example.
//!
//! Demonstrates creating a step motor around hand-written platform hooks
//! and driving it through a configure / start / adjust / stop cycle.
//!
//! The hooks here print instead of programming a timer, so the example runs
//! anywhere.

use stepmotor::{Direction, Duty, Hertz, MotorHal, StepMotor, StepMotorBuilder};

/// Platform hooks that log every call instead of touching hardware.
struct ConsoleHal;

impl MotorHal for ConsoleHal {
    type Error = core::convert::Infallible;

    fn set_pwm_duty(&mut self, duty: Duty) -> Result<(), Self::Error> {
        println!("  [hal] duty      -> {}", duty.value());
        Ok(())
    }

    fn set_pwm_freq(&mut self, freq_hz: Hertz) -> Result<(), Self::Error> {
        println!("  [hal] frequency -> {} Hz", freq_hz.value());
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        println!("  [hal] direction -> {:?} (code {})", direction, direction.code());
        Ok(())
    }

    fn start_pwm(&mut self) -> Result<(), Self::Error> {
        println!("  [hal] start");
        Ok(())
    }

    fn stop_pwm(&mut self) -> Result<(), Self::Error> {
        println!("  [hal] stop");
        Ok(())
    }
}

fn main() {
    println!("=== Basic Motor Control Example ===\n");

    // An unconfigured handle refuses every control operation.
    let mut bare = StepMotor::new(ConsoleHal);
    println!(
        "Start before configure: {}\n",
        bare.start().expect_err("should be rejected")
    );

    // Build a configured motor instead
    let mut motor = StepMotorBuilder::new()
        .hal(ConsoleHal)
        .name("demo_motor")
        .direction(Direction::Clockwise)
        .freq_hz(Hertz::khz(1))
        .duty(Duty::new(0.5))
        .build()
        .expect("Failed to build motor");

    println!("Motor created: {}", motor.name());
    println!(
        "Configured: {} Hz, duty {}, direction {:?}",
        motor.frequency().value(),
        motor.duty().value(),
        motor.direction()
    );
    println!("Running: {}\n", motor.is_running());

    println!("Pushing configuration to the hardware:");
    motor
        .set_frequency(motor.frequency())
        .expect("Failed to set frequency");
    motor.set_duty(motor.duty()).expect("Failed to set duty");
    motor
        .set_direction(motor.direction())
        .expect("Failed to set direction");

    println!("\nStarting:");
    motor.start().expect("Failed to start");
    println!("Running: {}\n", motor.is_running());

    println!("Ramping duty:");
    for duty in [0.6, 0.75, 0.9] {
        motor.set_duty(Duty::new(duty)).expect("Failed to set duty");
    }

    println!("\nReversing:");
    motor
        .set_direction(motor.direction().toggled())
        .expect("Failed to reverse");

    println!("\nStopping:");
    motor.stop().expect("Failed to stop");
    println!("Running: {}", motor.is_running());

    println!("\n=== Example Complete ===");
}
