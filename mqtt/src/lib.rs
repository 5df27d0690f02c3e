// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod client;
mod config;
mod connection;
mod error;

pub use crate::{
  client::{MqttConnection, MqttPublisher},
  config::{MqttConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TOPIC},
  connection::ConnectionState,
  error::MqttError,
};
