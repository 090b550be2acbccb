use measurements::Length;
use measurements::Volume;

use crate::vessel::Vessel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidTank {
  length: Length,
  width: Length,
  height: Length,
}

impl CuboidTank {
  pub fn new(length: Length, width: Length, height: Length) -> Self {
    Self { length, width, height }
  }

  pub fn length(&self) -> Length {
    self.length
  }

  pub fn width(&self) -> Length {
    self.width
  }

  pub fn height(&self) -> Length {
    self.height
  }
}

impl Vessel for CuboidTank {
  fn capacity(&self) -> Volume {
    self.volume_at(self.height)
  }

  fn volume_at(&self, depth: Length) -> Volume {
    Volume::from_liters(self.length.as_decimeters() * self.width.as_decimeters() * depth.as_decimeters())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn capacity() {
    let tank = CuboidTank::new(Length::from_meters(1.0), Length::from_meters(2.0), Length::from_meters(3.0));
    assert!((tank.capacity().as_liters() - 6000.0).abs() < 1e-6);
  }

  #[test]
  fn volume_at() {
    let tank = CuboidTank::new(Length::from_centimeters(10.0), Length::from_centimeters(20.0), Length::from_centimeters(30.0));
    assert!((tank.volume_at(Length::from_centimeters(5.0)).as_milliliters() - 1000.0).abs() < 1e-9);
  }

  #[test]
  fn overfill_is_not_clamped() {
    let tank = CuboidTank::new(Length::from_centimeters(10.0), Length::from_centimeters(10.0), Length::from_centimeters(10.0));
    assert!((tank.volume_at(Length::from_centimeters(12.0)).as_milliliters() - 1200.0).abs() < 1e-9);
    assert!(tank.volume_at(Length::from_centimeters(-1.0)).as_milliliters() < 0.0);
  }
}
