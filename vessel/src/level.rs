use measurements::Volume;

use crate::unit::VolumeUnit;

/// Fill state of a tank.
///
/// `percentage` is a ratio (`1.0` is full) and is not clamped, so readings
/// outside the calibrated range show up as values below zero or above one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
  pub(crate) percentage: f64,
  pub(crate) volume: Volume,
  pub(crate) unit: VolumeUnit,
}

impl Level {
  pub fn percentage(&self) -> f64 {
    self.percentage
  }

  /// Volume in the tank's preferred unit.
  pub fn volume(&self) -> f64 {
    self.unit.of(self.volume)
  }

  pub fn unit(&self) -> VolumeUnit {
    self.unit
  }

  pub fn label(&self) -> &'static str {
    self.unit.symbol()
  }
}

impl From<Level> for f64 {
  fn from(level: Level) -> Self {
    level.percentage
  }
}

impl From<Level> for Volume {
  fn from(level: Level) -> Self {
    level.volume
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preferred_unit() {
    let level = Level { percentage: 0.25, volume: Volume::from_liters(2.0), unit: VolumeUnit::Liter };
    assert!((level.volume() - 2.0).abs() < 1e-9);
    assert_eq!(level.label(), "L");
    assert_eq!(f64::from(level), 0.25);
    assert!((Volume::from(level).as_milliliters() - 2000.0).abs() < 1e-9);
  }
}
