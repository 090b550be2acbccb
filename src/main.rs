use std::io::{self, BufRead, Write};
use std::process;

use hc_sr04::HcSr04;
use log::{error, info};
use rppal::gpio::Gpio;
use serde_json::json;
use vessel::{CalibrationPoint, DistanceSensor, Tank};

mod config;
use self::config::Config;

fn reading<S: DistanceSensor>(tank: &mut Tank<S>) -> serde_json::Value {
  match tank.read() {
    Ok(level) => json!({
      "tank": tank.name(),
      "percentage": level.percentage() * 100.0,
      "volume": level.volume(),
      "unit": level.label(),
    }),
    Err(err) => json!({
      "tank": tank.name(),
      "error": err.to_string(),
    }),
  }
}

fn handle<S: DistanceSensor>(tank: &mut Tank<S>, command: &str) -> Option<String> {
  let output = match command {
    "full" | "empty" => {
      let point = CalibrationPoint::from(command == "full");
      match tank.calibrate(point) {
        Ok(()) => tank.describe(),
        Err(err) => format!("{}", err),
      }
    },
    "read" => reading(tank).to_string(),
    "describe" => tank.describe(),
    "" => return Some(String::new()),
    "quit" | "exit" => return None,
    other => format!("unknown command '{}', expected one of: full, empty, read, describe, quit", other),
  };

  Some(output)
}

fn main() {
  env_logger::init();

  let config = Config::from_env().unwrap_or_else(|err| {
    error!("invalid configuration: {}", err);
    process::exit(2);
  });

  let gpio = Gpio::new().expect("failed to access GPIO");
  let trigger = gpio.get(config.trigger_pin).expect("failed to access trigger pin").into_output();
  let echo = gpio.get(config.echo_pin).expect("failed to access echo pin").into_input();

  let sensor = HcSr04::new(trigger, echo).expect("failed to set up sensor");

  let mut tank = Tank::new(sensor).with_timeout(config.sensor_timeout);
  tank.configure(config.tank);
  info!("{}", tank);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut stdout = stdout.lock();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(line) => line,
      Err(err) => {
        error!("failed to read command: {}", err);
        break
      },
    };

    match handle(&mut tank, line.trim()) {
      Some(output) if output.is_empty() => continue,
      Some(output) => {
        if writeln!(stdout, "{}", output).is_err() {
          break
        }
      },
      None => break,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;
  use std::time::Duration;

  use vessel::{LengthUnit, TankConfig};

  use super::*;

  struct ScriptedSensor(VecDeque<i32>);

  impl DistanceSensor for ScriptedSensor {
    fn read_distance(&mut self, _timeout: Duration) -> Option<i32> {
      self.0.pop_front()
    }
  }

  #[test]
  fn session() {
    let mut tank = Tank::new(ScriptedSensor(vec![1000, 200, 600].into()));
    tank.configure(TankConfig::cuboid(10, 10, 100, LengthUnit::Centimeter).named("Barrel"));

    let uncalibrated = handle(&mut tank, "read").unwrap();
    assert_eq!(uncalibrated, r#"{"error":"tank calibration required","tank":"Barrel"}"#);

    assert!(handle(&mut tank, "empty").unwrap().starts_with("Tank Shape: Cuboid"));
    assert!(handle(&mut tank, "full").unwrap().ends_with("Calibrated Capacity: 8000.00mL"));

    let value: serde_json::Value = serde_json::from_str(&handle(&mut tank, "read").unwrap()).unwrap();
    assert_eq!(value["percentage"], 50.0);
    assert_eq!(value["unit"], "mL");

    assert!(handle(&mut tank, "read").unwrap().contains("no distance reading"));
    assert!(handle(&mut tank, "refill").unwrap().starts_with("unknown command"));
    assert_eq!(handle(&mut tank, ""), Some(String::new()));
    assert_eq!(handle(&mut tank, "quit"), None);
  }
}
