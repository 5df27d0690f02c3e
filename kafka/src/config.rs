// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::error::KafkaError;
use std::time::Duration;

pub const DEFAULT_BROKERS: &str = "localhost:9092";
pub const DEFAULT_TOPIC: &str = "openweather_data";

pub(crate) const MESSAGE_TIMEOUT_MS: &str = "5000";
pub(crate) const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct KafkaConfig {
  pub(crate) brokers: String,
  pub(crate) topic: String,
}

impl KafkaConfig {
  pub fn new(brokers: impl Into<String>, topic: impl Into<String>) -> Result<Self, KafkaError> {
    let brokers = brokers.into();
    if brokers.trim().is_empty() {
      return Err(KafkaError::ConfigError("Broker list cannot be empty".into()));
    }

    let topic = topic.into();
    if topic.is_empty() {
      return Err(KafkaError::ConfigError("Topic cannot be empty".into()));
    }

    Ok(Self { brokers, topic })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_empty_broker_list() {
    assert!(KafkaConfig::new("  ", DEFAULT_TOPIC).is_err());
  }

  #[test]
  fn rejects_empty_topic() {
    assert!(KafkaConfig::new(DEFAULT_BROKERS, "").is_err());
  }

  #[test]
  fn accepts_defaults() {
    assert!(KafkaConfig::new(DEFAULT_BROKERS, DEFAULT_TOPIC).is_ok());
  }
}
