// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};
use weather::WeatherReading;

const SOURCE_TAG: &str = "mqtt";

/// Broker-variant wire format. Field order matters to downstream consumers,
/// so it is fixed by declaration order here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
  pub source: String,
  pub device_id: String,
  pub humidity: f64,
  pub temperature: f64,
  pub feels_like: f64,
}

impl OutboundMessage {
  pub fn new(device_id: impl Into<String>, reading: &WeatherReading) -> Self {
    Self {
      source: SOURCE_TAG.to_string(),
      device_id: device_id.into(),
      humidity: reading.humidity,
      temperature: reading.temperature,
      feels_like: reading.feels_like,
    }
  }
}
