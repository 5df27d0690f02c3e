// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::error::WeatherError;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: String,
  pub(crate) latitude: String,
  pub(crate) longitude: String,
}

impl WeatherConfig {
  pub fn new(
    api_key: impl Into<String>,
    latitude: impl Into<String>,
    longitude: impl Into<String>,
  ) -> Result<Self> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(WeatherError::InvalidApiKey.into());
    }

    Ok(Self {
      api_key,
      latitude: latitude.into(),
      longitude: longitude.into(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

  #[test]
  fn accepts_valid_key() {
    let config = WeatherConfig::new("secret", DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
    assert!(config.is_ok());
  }

  #[test]
  fn rejects_empty_key() {
    let config = WeatherConfig::new("   ", DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
    assert!(config.is_err());
  }
}
