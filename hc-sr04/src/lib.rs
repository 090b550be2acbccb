use std::time::{Instant, Duration};
use std::thread;

use log::warn;
use ordered_float::NotNan;
use rppal::gpio::{self, OutputPin, InputPin, Level::*, Trigger};
use vessel::DistanceSensor;

const TEMPERATURE: f64 = 15.5; // °C
const SPEED_OF_SOUND: f64 = 331.5 + 0.6 * TEMPERATURE; // m/s

#[derive(Debug)]
pub enum Error {
  NoRisingEdgeDetected,
  NoFallingEdgeDetected,
  InvalidEcho,
  Gpio(gpio::Error),
}

#[derive(Debug)]
pub struct HcSr04 {
  trigger: OutputPin,
  echo: InputPin,
}

impl HcSr04 {
  pub fn new(mut trigger: OutputPin, mut echo: InputPin) -> Result<HcSr04, Error> {
    trigger.set_low();
    echo.set_interrupt(Trigger::Both).map_err(Error::Gpio)?;

    Ok(HcSr04 { trigger, echo })
  }

  /// Triggers an ultrasonic measurement and returns the distance in meters.
  ///
  /// Gives up once `timeout` has passed without a complete echo.
  pub fn measure(&mut self, timeout: Duration) -> Result<NotNan<f64>, Error> {
    self.trigger.set_high();
    thread::sleep(Duration::from_micros(10));
    self.trigger.set_low();

    let deadline = Instant::now() + timeout;

    let mut start = None;
    let mut stop = None;

    while stop.is_none() {
      let remaining = deadline.saturating_duration_since(Instant::now());
      if remaining == Duration::from_secs(0) {
        break
      }

      match self.echo.poll_interrupt(false, Some(remaining)).map_err(Error::Gpio)? {
        Some(High) => {
          if start.is_none() {
            start = Some(Instant::now());
          }
        },
        Some(Low) => {
          if start.is_some() {
            stop = Some(Instant::now())
          }
        },
        None => break,
      }
    }

    let start = start.ok_or(Error::NoRisingEdgeDetected)?;
    let stop = stop.ok_or(Error::NoFallingEdgeDetected)?;

    NotNan::new(echo_distance(stop - start)).map_err(|_| Error::InvalidEcho)
  }
}

/// Distance in meters to the surface reflecting an echo of the given length.
pub fn echo_distance(echo_length: Duration) -> f64 {
  echo_length.as_secs_f64() / 2.0 * SPEED_OF_SOUND
}

fn millimeters(meters: f64) -> i32 {
  (meters * 1000.0).round() as i32
}

impl DistanceSensor for HcSr04 {
  fn read_distance(&mut self, timeout: Duration) -> Option<i32> {
    match self.measure(timeout) {
      Ok(distance) => Some(millimeters(distance.into_inner())),
      Err(err) => {
        warn!("ultrasonic measurement failed: {:?}", err);
        None
      },
    }
  }
}
