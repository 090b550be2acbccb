use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use vessel::{ParseError, TankConfig, DEFAULT_TIMEOUT};

const TRIGGER_PIN: u8 = 17;
const ECHO_PIN:    u8 = 18;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{name}: {source}")]
  Unit { name: &'static str, source: ParseError },
  #[error("{name}: invalid number '{value}': {source}")]
  Number { name: &'static str, value: String, source: ParseIntError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub tank: TankConfig,
  pub sensor_timeout: Duration,
  pub trigger_pin: u8,
  pub echo_pin: u8,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_vars(|name| env::var(name).ok())
  }

  pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let var = &var;

    let tank = TankConfig {
      name: var("TANK_NAME").unwrap_or_default(),
      shape: unit(var, "TANK_SHAPE")?.unwrap_or_default(),
      length_unit: unit(var, "TANK_LENGTH_UNIT")?.unwrap_or_default(),
      volume_unit: unit(var, "TANK_VOLUME_UNIT")?.unwrap_or_default(),
      radius: number(var, "TANK_RADIUS")?.unwrap_or_default(),
      height: number(var, "TANK_HEIGHT")?.unwrap_or_default(),
      side1: number(var, "TANK_SIDE1")?.unwrap_or_default(),
      side2: number(var, "TANK_SIDE2")?.unwrap_or_default(),
    };

    Ok(Config {
      tank,
      sensor_timeout: number(var, "SENSOR_TIMEOUT_MS")?.map(Duration::from_millis).unwrap_or(DEFAULT_TIMEOUT),
      trigger_pin: number(var, "TRIGGER_PIN")?.unwrap_or(TRIGGER_PIN),
      echo_pin: number(var, "ECHO_PIN")?.unwrap_or(ECHO_PIN),
    })
  }
}

fn unit<T>(var: &dyn Fn(&str) -> Option<String>, name: &'static str) -> Result<Option<T>, ConfigError>
where
  T: FromStr<Err = ParseError>,
{
  var(name).map(|value| value.parse().map_err(|source| ConfigError::Unit { name, source })).transpose()
}

fn number<T>(var: &dyn Fn(&str) -> Option<String>, name: &'static str) -> Result<Option<T>, ConfigError>
where
  T: FromStr<Err = ParseIntError>,
{
  var(name).map(|value| value.trim().parse().map_err(|source| ConfigError::Number { name, value, source })).transpose()
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use vessel::{LengthUnit, TankShape, VolumeUnit};

  use super::*;

  fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_vars(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(config.tank, TankConfig::default());
    assert_eq!(config.sensor_timeout, DEFAULT_TIMEOUT);
    assert_eq!((config.trigger_pin, config.echo_pin), (17, 18));
  }

  #[test]
  fn tank() {
    let config = config(&[
      ("TANK_NAME", "Oil"),
      ("TANK_SHAPE", "cuboid"),
      ("TANK_LENGTH_UNIT", "cm"),
      ("TANK_VOLUME_UNIT", "liters"),
      ("TANK_SIDE1", "298"),
      ("TANK_SIDE2", "148"),
      ("TANK_HEIGHT", " 150 "),
      ("SENSOR_TIMEOUT_MS", "250"),
      ("ECHO_PIN", "24"),
    ]).unwrap();

    assert_eq!(config.tank, TankConfig::cuboid(298, 148, 150, LengthUnit::Centimeter).named("Oil").reporting_in(VolumeUnit::Liter));
    assert_eq!(config.tank.shape, TankShape::Cuboid);
    assert_eq!(config.sensor_timeout, Duration::from_millis(250));
    assert_eq!(config.echo_pin, 24);
  }

  #[test]
  fn invalid() {
    assert!(matches!(config(&[("TANK_SHAPE", "cone")]), Err(ConfigError::Unit { name: "TANK_SHAPE", .. })));
    assert!(matches!(config(&[("TANK_RADIUS", "-3")]), Err(ConfigError::Number { name: "TANK_RADIUS", .. })));
    assert!(matches!(config(&[("TRIGGER_PIN", "300")]), Err(ConfigError::Number { name: "TRIGGER_PIN", .. })));
  }
}
