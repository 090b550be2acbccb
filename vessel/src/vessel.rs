use measurements::{Length, Volume};

/// Geometry of a tank shape.
pub trait Vessel {
  /// Volume of the completely filled tank.
  fn capacity(&self) -> Volume;

  /// Volume of liquid standing `depth` high above the bottom.
  fn volume_at(&self, depth: Length) -> Volume;
}
