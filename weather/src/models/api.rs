// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

/// The One Call endpoint returns far more than we consume; only the
/// `current` block is deserialized, everything else is ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct OneCallResponse {
  pub current: Option<CurrentConditions>,
}

/// Current conditions as reported by the provider: temperatures in Kelvin,
/// humidity in percent.
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentConditions {
  pub temp: f64,
  pub feels_like: f64,
  pub humidity: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_current_block_and_ignores_the_rest() {
    let body = r#"{
      "lat": 49.150002,
      "lon": 9.2166,
      "timezone": "Europe/Berlin",
      "current": {
        "dt": 1717410000,
        "temp": 300.0,
        "feels_like": 298.0,
        "pressure": 1012,
        "humidity": 55,
        "wind_speed": 3.6
      }
    }"#;

    let response: OneCallResponse = serde_json::from_str(body).unwrap();
    let current = response.current.unwrap();
    assert_eq!(current.temp, 300.0);
    assert_eq!(current.feels_like, 298.0);
    assert_eq!(current.humidity, 55.0);
  }

  #[test]
  fn missing_current_is_not_a_parse_error() {
    let response: OneCallResponse = serde_json::from_str(r#"{"timezone":"UTC"}"#).unwrap();
    assert!(response.current.is_none());
  }
}
