use std::fmt;
use std::str::FromStr;

use measurements::{Length, Volume};

use crate::error::ParseError;

/// Unit in which tank dimensions are given. Internally everything is centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
  Centimeter,
  Millimeter,
  Meter,
  Inch,
  Foot,
}

impl LengthUnit {
  pub const ALL: [LengthUnit; 5] = [
    LengthUnit::Centimeter,
    LengthUnit::Millimeter,
    LengthUnit::Meter,
    LengthUnit::Inch,
    LengthUnit::Foot,
  ];

  /// Centimeters per one of this unit.
  pub fn factor(self) -> f64 {
    match self {
      LengthUnit::Centimeter => 1.0,
      LengthUnit::Millimeter => 0.1,
      LengthUnit::Meter => 100.0,
      LengthUnit::Inch => 2.54,
      LengthUnit::Foot => 30.48,
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      LengthUnit::Centimeter => "cm",
      LengthUnit::Millimeter => "mm",
      LengthUnit::Meter => "m",
      LengthUnit::Inch => "in",
      LengthUnit::Foot => "ft",
    }
  }

  pub fn to_centimeters(self, value: f64) -> f64 {
    value * self.factor()
  }

  pub fn from_centimeters(self, centimeters: f64) -> f64 {
    centimeters / self.factor()
  }

  pub fn length(self, value: f64) -> Length {
    Length::from_centimeters(self.to_centimeters(value))
  }

  /// Expresses `length` in this unit.
  pub fn of(self, length: Length) -> f64 {
    self.from_centimeters(length.as_centimeters())
  }
}

impl Default for LengthUnit {
  fn default() -> Self {
    LengthUnit::Centimeter
  }
}

impl fmt::Display for LengthUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

impl FromStr for LengthUnit {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let unit = match s.trim().to_ascii_lowercase().trim_end_matches('s') {
      "cm" | "centimeter" | "centimetre" => LengthUnit::Centimeter,
      "mm" | "millimeter" | "millimetre" => LengthUnit::Millimeter,
      "m" | "meter" | "metre" => LengthUnit::Meter,
      "in" | "inch" | "inche" => LengthUnit::Inch,
      "ft" | "foot" | "feet" => LengthUnit::Foot,
      _ => return Err(ParseError::LengthUnit(s.to_owned())),
    };

    Ok(unit)
  }
}

/// Unit in which volumes are reported. Internally everything is milliliters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
  Milliliter,
  Liter,
  Ounce,
  Pint,
  Quart,
  Gallon,
}

impl VolumeUnit {
  pub const ALL: [VolumeUnit; 6] = [
    VolumeUnit::Milliliter,
    VolumeUnit::Liter,
    VolumeUnit::Ounce,
    VolumeUnit::Pint,
    VolumeUnit::Quart,
    VolumeUnit::Gallon,
  ];

  /// Amount of this unit in one milliliter.
  pub fn factor(self) -> f64 {
    match self {
      VolumeUnit::Milliliter => 1.0,
      VolumeUnit::Liter => 0.001,
      VolumeUnit::Ounce => 0.0338,
      VolumeUnit::Pint => 0.002113,
      VolumeUnit::Quart => 0.001057,
      VolumeUnit::Gallon => 0.000264172,
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      VolumeUnit::Milliliter => "mL",
      VolumeUnit::Liter => "L",
      VolumeUnit::Ounce => "oz",
      VolumeUnit::Pint => "pt",
      VolumeUnit::Quart => "qt",
      VolumeUnit::Gallon => "gal",
    }
  }

  pub fn from_milliliters(self, milliliters: f64) -> f64 {
    milliliters * self.factor()
  }

  pub fn to_milliliters(self, value: f64) -> f64 {
    value / self.factor()
  }

  pub fn volume(self, value: f64) -> Volume {
    Volume::from_milliliters(self.to_milliliters(value))
  }

  /// Expresses `volume` in this unit.
  pub fn of(self, volume: Volume) -> f64 {
    self.from_milliliters(volume.as_milliliters())
  }
}

impl Default for VolumeUnit {
  fn default() -> Self {
    VolumeUnit::Milliliter
  }
}

impl fmt::Display for VolumeUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

impl FromStr for VolumeUnit {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let unit = match s.trim().to_ascii_lowercase().trim_end_matches('s') {
      "ml" | "milliliter" | "millilitre" | "cc" => VolumeUnit::Milliliter,
      "l" | "liter" | "litre" => VolumeUnit::Liter,
      "oz" | "ounce" => VolumeUnit::Ounce,
      "pt" | "pint" => VolumeUnit::Pint,
      "qt" | "quart" => VolumeUnit::Quart,
      "gal" | "gallon" => VolumeUnit::Gallon,
      _ => return Err(ParseError::VolumeUnit(s.to_owned())),
    };

    Ok(unit)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn length_round_trip() {
    for unit in LengthUnit::ALL.iter() {
      for value in [0.5, 1.0, 42.0, 1234.5].iter() {
        let back = unit.to_centimeters(unit.from_centimeters(*value));
        assert!((back - value).abs() < 1e-9, "{} {}", unit, value);
      }
    }
  }

  #[test]
  fn length_factors() {
    assert_eq!(LengthUnit::Meter.to_centimeters(2.0), 200.0);
    assert_eq!(LengthUnit::Inch.to_centimeters(10.0), 25.4);
    assert!((LengthUnit::Millimeter.length(25.0).as_centimeters() - 2.5).abs() < 1e-9);
    assert!((LengthUnit::Foot.of(Length::from_centimeters(60.96)) - 2.0).abs() < 1e-9);
  }

  #[test]
  fn volume_inverse() {
    for unit in VolumeUnit::ALL.iter() {
      let one = unit.from_milliliters(1.0 / unit.factor());
      assert!((one - 1.0).abs() < 1e-9, "{}", unit);
    }
  }

  #[test]
  fn volume_of() {
    assert!((VolumeUnit::Liter.of(Volume::from_milliliters(2500.0)) - 2.5).abs() < 1e-9);
    assert!((VolumeUnit::Gallon.volume(1.0).as_milliliters() - 1.0 / 0.000264172).abs() < 1e-6);
  }

  #[test]
  fn parse() {
    assert_eq!("cm".parse::<LengthUnit>().unwrap(), LengthUnit::Centimeter);
    assert_eq!("Feet".parse::<LengthUnit>().unwrap(), LengthUnit::Foot);
    assert_eq!("inches".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
    assert_eq!("gal".parse::<VolumeUnit>().unwrap(), VolumeUnit::Gallon);
    assert_eq!("Liters".parse::<VolumeUnit>().unwrap(), VolumeUnit::Liter);
    assert_eq!("mL".parse::<VolumeUnit>().unwrap(), VolumeUnit::Milliliter);
    assert!(matches!("furlong".parse::<LengthUnit>(), Err(ParseError::LengthUnit(s)) if s == "furlong"));
    assert!("barrel".parse::<VolumeUnit>().is_err());
  }

  #[test]
  fn labels() {
    let labels: Vec<String> = LengthUnit::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["cm", "mm", "m", "in", "ft"]);
    let labels: Vec<String> = VolumeUnit::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["mL", "L", "oz", "pt", "qt", "gal"]);
  }
}
