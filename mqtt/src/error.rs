// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MqttError {
  #[error("Invalid configuration: {0}")]
  ConfigError(String),
  #[error("Broker refused or closed the connection")]
  ConnectFailed,
  #[error("Connection task ended before reporting a state")]
  ConnectionClosed,
  #[error("Publish attempted before the connection was established")]
  NotConnected,
  #[error("MQTT client error: {0}")]
  Client(#[from] rumqttc::ClientError),
}
