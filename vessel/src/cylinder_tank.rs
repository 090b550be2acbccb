use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::vessel::Vessel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderTank {
  radius: Length,
  height: Length,
}

impl CylinderTank {
  pub fn new(radius: Length, height: Length) -> Self {
    Self { radius, height }
  }

  pub fn radius(&self) -> Length {
    self.radius
  }

  pub fn height(&self) -> Length {
    self.height
  }
}

impl Vessel for CylinderTank {
  fn capacity(&self) -> Volume {
    self.volume_at(self.height)
  }

  fn volume_at(&self, depth: Length) -> Volume {
    let r = self.radius.as_centimeters();
    Volume::from_milliliters(PI * r * r * depth.as_centimeters())
  }
}
