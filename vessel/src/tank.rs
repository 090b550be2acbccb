use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};
use measurements::{Length, Volume};

use crate::calibration::{Calibration, CalibrationPoint};
use crate::config::{TankConfig, DEFAULT_NAME};
use crate::error::Error;
use crate::geometry::Geometry;
use crate::level::Level;
use crate::sensor::DistanceSensor;
use crate::trigger::{Trigger, Triggerable};
use crate::unit::{LengthUnit, VolumeUnit};
use crate::vessel::Vessel;

/// Returned for both numbers by [`Tank::read_or_sentinel`] when no reading is possible.
pub const UNCALIBRATED: f64 = -420.69;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

/// A tank measured by a distance sensor mounted above the liquid.
#[derive(Debug)]
pub struct Tank<S> {
  sensor: S,
  timeout: Duration,
  name: String,
  length_unit: LengthUnit,
  volume_unit: VolumeUnit,
  geometry: Geometry,
  calibration: Calibration,
}

impl<S: DistanceSensor> Tank<S> {
  pub fn new(sensor: S) -> Self {
    let mut tank = Self {
      sensor,
      timeout: DEFAULT_TIMEOUT,
      name: String::new(),
      length_unit: LengthUnit::default(),
      volume_unit: VolumeUnit::default(),
      geometry: Geometry::default(),
      calibration: Calibration::new(),
    };
    tank.configure(TankConfig::default());
    tank
  }

  /// Bounds how long a single sensor sample may take.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Sets name, units and dimensions. Calibration is kept.
  pub fn configure(&mut self, config: TankConfig) {
    self.geometry = Geometry::from_config(&config);
    self.length_unit = config.length_unit;
    self.volume_unit = config.volume_unit;
    self.name = if config.name.is_empty() { DEFAULT_NAME.to_owned() } else { config.name };

    debug!("configured tank '{}': {:?}", self.name, self.geometry);
  }

  /// Samples the sensor and stores the reading as the given calibration point.
  pub fn calibrate(&mut self, point: CalibrationPoint) -> Result<(), Error> {
    let sample = self.sample()?;
    self.calibrate_with(point, sample)
  }

  pub fn calibrate_with(&mut self, point: CalibrationPoint, sample: i32) -> Result<(), Error> {
    match self.calibration.calibrate(point, sample) {
      Ok(()) => {
        info!("tank '{}': calibrated {:?} at {}", self.name, point, sample);
        Ok(())
      },
      Err(err) => {
        warn!("tank '{}': {}", self.name, err);
        Err(err)
      },
    }
  }

  pub fn read(&mut self) -> Result<Level, Error> {
    let (full, empty) = self.calibration.bounds().ok_or(Error::CalibrationRequired)?;
    let sample = self.sample()?;

    let depth = f64::from(empty) - f64::from(sample);
    let percentage = depth / (f64::from(empty) - f64::from(full));
    let volume = self.volume_at(depth);

    debug!("tank '{}': sample {} -> {:.3} / {:.2}mL", self.name, sample, percentage, volume.as_milliliters());

    Ok(Level { percentage, volume, unit: self.volume_unit })
  }

  /// Like [`read`](Self::read), but always yields both numbers, set to
  /// [`UNCALIBRATED`] when the read fails.
  pub fn read_or_sentinel(&mut self) -> (f64, f64, Result<&'static str, Error>) {
    match self.read() {
      Ok(level) => (level.percentage(), level.volume(), Ok(level.label())),
      Err(err) => (UNCALIBRATED, UNCALIBRATED, Err(err)),
    }
  }

  fn sample(&mut self) -> Result<i32, Error> {
    self.sensor.read_distance(self.timeout).ok_or(Error::SensorTimeout(self.timeout))
  }

  /// Volume at a raw depth, i.e. a distance in sensor units below the empty mark.
  fn volume_at(&self, raw_depth: f64) -> Volume {
    let depth = Length::from_centimeters(raw_depth / S::UNITS_PER_CENTIMETER);
    self.geometry.volume_at(depth)
  }

  /// Geometric capacity in the preferred volume unit.
  pub fn capacity(&self) -> f64 {
    self.volume_unit.of(self.geometry.capacity())
  }

  /// Volume at the full mark in the preferred volume unit.
  pub fn calibrated_capacity(&self) -> Option<f64> {
    self.calibration.span().map(|span| self.volume_unit.of(self.volume_at(span as f64)))
  }

  pub fn describe(&self) -> String {
    self.to_string()
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn geometry(&self) -> &Geometry {
    &self.geometry
  }

  pub fn calibration(&self) -> &Calibration {
    &self.calibration
  }

  pub fn length_unit(&self) -> LengthUnit {
    self.length_unit
  }

  pub fn volume_unit(&self) -> VolumeUnit {
    self.volume_unit
  }
}

impl<S: DistanceSensor> fmt::Display for Tank<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Tank Shape: {}", self.geometry.shape())?;

    for (label, length) in self.geometry.dimensions() {
      write!(f, " {}: {:.2}{}", label, self.length_unit.of(length), self.length_unit)?;
    }

    match self.calibrated_capacity() {
      Some(capacity) => write!(f, " Calibrated Capacity: {:.2}{}", capacity, self.volume_unit),
      None => write!(f, " Calibrated Capacity: n/a"),
    }
  }
}

impl<S: DistanceSensor> Triggerable for Tank<S> {
  fn name(&self) -> &str {
    &self.name
  }

  fn execute(&mut self, trigger: Trigger) {
    debug!("tank '{}': ignoring trigger {:?}", self.name, trigger);
  }
}
