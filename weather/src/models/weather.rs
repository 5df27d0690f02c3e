// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::{CurrentConditions, OneCallResponse};
use crate::constants::KELVIN_OFFSET;
use crate::error::WeatherError;
use serde::{Deserialize, Serialize};

/// Normalized reading handed to the publisher: temperatures in Celsius,
/// humidity in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
  pub temperature: f64,
  pub feels_like: f64,
  pub humidity: f64,
}

impl WeatherReading {
  /// A response without a `current` block is a malformed body, not a crash;
  /// the caller decides whether to skip the cycle or give up.
  pub fn from_response(response: OneCallResponse) -> Result<Self, WeatherError> {
    let current = response
      .current
      .ok_or_else(|| WeatherError::MalformedBody("response has no `current` object".into()))?;

    Ok(Self::from_current(&current))
  }

  fn from_current(current: &CurrentConditions) -> Self {
    Self {
      temperature: current.temp - KELVIN_OFFSET,
      feels_like: current.feels_like - KELVIN_OFFSET,
      humidity: current.humidity,
    }
  }
}
