use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("tank calibration required")]
  CalibrationRequired,
  #[error("calibration failed - 'full' reading {sample} would not be shallower than 'empty' reading {empty}")]
  FullCalibrationInvalid { sample: i32, empty: i32 },
  #[error("calibration failed - 'empty' reading {sample} would not be deeper than 'full' reading {full}")]
  EmptyCalibrationInvalid { sample: i32, full: i32 },
  #[error("no distance reading within {0:?}")]
  SensorTimeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("unknown tank shape '{0}'")]
  Shape(String),
  #[error("unknown length unit '{0}'")]
  LengthUnit(String),
  #[error("unknown volume unit '{0}'")]
  VolumeUnit(String),
}
