use std::fmt;
use std::str::FromStr;

use measurements::{Length, Volume};

use crate::config::TankConfig;
use crate::cuboid_tank::CuboidTank;
use crate::cylinder_tank::CylinderTank;
use crate::error::ParseError;
use crate::sphere_tank::SphereTank;
use crate::vessel::Vessel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankShape {
  Cylinder,
  Cuboid,
  Sphere,
}

impl Default for TankShape {
  fn default() -> Self {
    TankShape::Cylinder
  }
}

impl fmt::Display for TankShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      TankShape::Cylinder => "Cylinder",
      TankShape::Cuboid => "Cuboid",
      TankShape::Sphere => "Sphere",
    })
  }
}

impl FromStr for TankShape {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "cylinder" => Ok(TankShape::Cylinder),
      "cuboid" | "box" => Ok(TankShape::Cuboid),
      "sphere" => Ok(TankShape::Sphere),
      _ => Err(ParseError::Shape(s.to_owned())),
    }
  }
}

/// Tank dimensions, normalized to centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
  Cylinder(CylinderTank),
  Cuboid(CuboidTank),
  Sphere(SphereTank),
}

impl Geometry {
  pub fn from_config(config: &TankConfig) -> Self {
    let length = |value: u32| config.length_unit.length(f64::from(value));

    match config.shape {
      TankShape::Cylinder => Geometry::Cylinder(CylinderTank::new(length(config.radius), length(config.height))),
      TankShape::Cuboid => Geometry::Cuboid(CuboidTank::new(length(config.side1), length(config.side2), length(config.height))),
      TankShape::Sphere => Geometry::Sphere(SphereTank::new(length(config.radius))),
    }
  }

  pub fn shape(&self) -> TankShape {
    match self {
      Geometry::Cylinder(_) => TankShape::Cylinder,
      Geometry::Cuboid(_) => TankShape::Cuboid,
      Geometry::Sphere(_) => TankShape::Sphere,
    }
  }

  /// Named dimensions relevant to the shape, in display order.
  pub fn dimensions(&self) -> Vec<(&'static str, Length)> {
    match self {
      Geometry::Cylinder(tank) => vec![("Height", tank.height()), ("Radius", tank.radius())],
      Geometry::Cuboid(tank) => vec![("Length", tank.length()), ("Width", tank.width()), ("Height", tank.height())],
      Geometry::Sphere(tank) => vec![("Radius", tank.radius())],
    }
  }

  fn vessel(&self) -> &dyn Vessel {
    match self {
      Geometry::Cylinder(tank) => tank,
      Geometry::Cuboid(tank) => tank,
      Geometry::Sphere(tank) => tank,
    }
  }
}

impl Default for Geometry {
  fn default() -> Self {
    Geometry::from_config(&TankConfig::default())
  }
}

impl Vessel for Geometry {
  fn capacity(&self) -> Volume {
    self.vessel().capacity()
  }

  fn volume_at(&self, depth: Length) -> Volume {
    self.vessel().volume_at(depth)
  }
}
