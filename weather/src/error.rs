// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Failed to build API URL: {0}")]
  InvalidUrl(String),
  #[error("HTTP transport failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("API request timed out")]
  Timeout,
  #[error("API request failed: {0}")]
  NonSuccessStatus(reqwest::StatusCode),
  #[error("Malformed API response: {0}")]
  MalformedBody(String),
}
