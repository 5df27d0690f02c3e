// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::error::MqttError;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 1883;
pub const DEFAULT_TOPIC: &str = "iot/devices/open_weather";

pub(crate) const KEEP_ALIVE: Duration = Duration::from_secs(30);
pub(crate) const EVENT_LOOP_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct MqttConfig {
  pub(crate) host: String,
  pub(crate) port: u16,
  pub(crate) client_id: String,
  pub(crate) topic: String,
  pub(crate) credentials: Option<(String, String)>,
}

impl MqttConfig {
  pub fn new(
    host: impl Into<String>,
    port: u16,
    client_id: impl Into<String>,
    topic: impl Into<String>,
  ) -> Result<Self, MqttError> {
    let client_id = client_id.into();
    if client_id.trim().is_empty() {
      return Err(MqttError::ConfigError("Client ID cannot be empty".into()));
    }

    let topic = topic.into();
    if topic.is_empty() {
      return Err(MqttError::ConfigError("Topic cannot be empty".into()));
    }

    Ok(Self {
      host: host.into(),
      port,
      client_id,
      topic,
      credentials: None,
    })
  }

  pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
    self.credentials = Some((username.into(), password.into()));
    self
  }
}
