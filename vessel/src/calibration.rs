use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationPoint {
  Full,
  Empty,
}

impl From<bool> for CalibrationPoint {
  fn from(full: bool) -> Self {
    if full { CalibrationPoint::Full } else { CalibrationPoint::Empty }
  }
}

/// Raw sensor distances marking a full and an empty tank.
///
/// The sensor sits above the liquid, so `full` is always the shorter distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calibration {
  full: Option<i32>,
  empty: Option<i32>,
}

impl Calibration {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn full(&self) -> Option<i32> {
    self.full
  }

  pub fn empty(&self) -> Option<i32> {
    self.empty
  }

  pub fn is_calibrated(&self) -> bool {
    self.bounds().is_some()
  }

  /// `(full, empty)` once both points are set.
  pub fn bounds(&self) -> Option<(i32, i32)> {
    Some((self.full?, self.empty?))
  }

  /// Raw distance between the full and the empty mark.
  pub fn span(&self) -> Option<i64> {
    self.bounds().map(|(full, empty)| i64::from(empty) - i64::from(full))
  }

  /// Sets one point, rejecting samples that would invert the full/empty order.
  /// A point is always accepted while the opposite one is still unset.
  pub fn calibrate(&mut self, point: CalibrationPoint, sample: i32) -> Result<(), Error> {
    match point {
      CalibrationPoint::Full => {
        if let Some(empty) = self.empty {
          if sample >= empty {
            return Err(Error::FullCalibrationInvalid { sample, empty })
          }
        }

        self.full = Some(sample);
      },
      CalibrationPoint::Empty => {
        if let Some(full) = self.full {
          if sample <= full {
            return Err(Error::EmptyCalibrationInvalid { sample, full })
          }
        }

        self.empty = Some(sample);
      },
    }

    Ok(())
  }
}
