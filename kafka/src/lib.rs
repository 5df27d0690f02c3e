// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
mod error;
mod producer;

pub use crate::{
  config::{KafkaConfig, DEFAULT_BROKERS, DEFAULT_TOPIC},
  error::KafkaError,
  producer::ReadingProducer,
};
