//! Liquid level and volume of a tank, measured with an ultrasonic
//! distance sensor mounted above the liquid.

mod calibration;
mod config;
mod cuboid_tank;
mod cylinder_tank;
mod error;
mod geometry;
mod level;
mod sensor;
mod sphere_tank;
mod tank;
mod trigger;
mod unit;
mod vessel;

pub use crate::calibration::{Calibration, CalibrationPoint};
pub use crate::config::{TankConfig, DEFAULT_NAME};
pub use crate::cuboid_tank::CuboidTank;
pub use crate::cylinder_tank::CylinderTank;
pub use crate::error::{Error, ParseError};
pub use crate::geometry::{Geometry, TankShape};
pub use crate::level::Level;
pub use crate::sensor::DistanceSensor;
pub use crate::sphere_tank::SphereTank;
pub use crate::tank::{Tank, DEFAULT_TIMEOUT, UNCALIBRATED};
pub use crate::trigger::{Trigger, Triggerable};
pub use crate::unit::{LengthUnit, VolumeUnit};
pub use crate::vessel::Vessel;
