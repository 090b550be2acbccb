use std::time::Duration;

/// Source of raw time-of-flight distance samples.
pub trait DistanceSensor {
  /// Sample units per centimeter. The default is millimeter resolution.
  const UNITS_PER_CENTIMETER: f64 = 10.0;

  /// Takes one sample, blocking for at most `timeout`.
  ///
  /// Returns `None` if no sample could be taken in time.
  fn read_distance(&mut self, timeout: Duration) -> Option<i32>;
}

impl<S: DistanceSensor + ?Sized> DistanceSensor for &mut S {
  const UNITS_PER_CENTIMETER: f64 = S::UNITS_PER_CENTIMETER;

  fn read_distance(&mut self, timeout: Duration) -> Option<i32> {
    (**self).read_distance(timeout)
  }
}
