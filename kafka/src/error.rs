// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KafkaError {
  #[error("Invalid configuration: {0}")]
  ConfigError(String),
  #[error("Failed to create Kafka producer: {0}")]
  Producer(#[source] rdkafka::error::KafkaError),
  #[error("Failed to deliver record: {0}")]
  Delivery(#[source] rdkafka::error::KafkaError),
}
