use crate::geometry::TankShape;
use crate::unit::{LengthUnit, VolumeUnit};

pub const DEFAULT_NAME: &str = "MyTank";

/// Caller-supplied tank setup. Dimensions are given in `length_unit`; the ones
/// irrelevant to `shape` are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TankConfig {
  pub name: String,
  pub shape: TankShape,
  pub length_unit: LengthUnit,
  pub volume_unit: VolumeUnit,
  /// Radius of a cylinder or sphere.
  pub radius: u32,
  /// Height of a cylinder or cuboid.
  pub height: u32,
  /// First side of a cuboid.
  pub side1: u32,
  /// Second side of a cuboid.
  pub side2: u32,
}

impl TankConfig {
  pub fn cylinder(radius: u32, height: u32, length_unit: LengthUnit) -> Self {
    Self { shape: TankShape::Cylinder, length_unit, radius, height, ..Default::default() }
  }

  pub fn cuboid(side1: u32, side2: u32, height: u32, length_unit: LengthUnit) -> Self {
    Self { shape: TankShape::Cuboid, length_unit, side1, side2, height, ..Default::default() }
  }

  pub fn sphere(radius: u32, length_unit: LengthUnit) -> Self {
    Self { shape: TankShape::Sphere, length_unit, radius, ..Default::default() }
  }

  pub fn named(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  pub fn reporting_in(mut self, volume_unit: VolumeUnit) -> Self {
    self.volume_unit = volume_unit;
    self
  }
}
