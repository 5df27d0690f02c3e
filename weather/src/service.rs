// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{config::WeatherConfig, constants::*, error::WeatherError, models::api::OneCallResponse};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{error, instrument};
use url::Url;

#[async_trait]
pub trait WeatherApi: Send + Sync {
  async fn fetch_current(&self) -> Result<OneCallResponse, WeatherError>;
}

pub struct OpenWeatherClient {
  config: WeatherConfig,
  client: reqwest::Client,
  base_url: String,
}

impl OpenWeatherClient {
  pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
    let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    Ok(Self {
      config,
      client,
      base_url: API_BASE_URL.into(),
    })
  }

  #[cfg(test)]
  pub fn with_base_url(config: WeatherConfig, base_url: &str) -> Result<Self, WeatherError> {
    let mut client = Self::new(config)?;
    client.base_url = base_url.to_string();
    Ok(client)
  }

  // The URL carries the API key; never log it.
  fn build_api_url(&self) -> Result<Url, WeatherError> {
    Url::parse_with_params(
      &self.base_url,
      &[
        ("lat", self.config.latitude.as_str()),
        ("lon", self.config.longitude.as_str()),
        ("exclude", EXCLUDE_BLOCKS),
        ("appid", self.config.api_key.as_str()),
      ],
    )
    .map_err(|e| WeatherError::InvalidUrl(e.to_string()))
  }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
  #[instrument(skip(self))]
  async fn fetch_current(&self) -> Result<OneCallResponse, WeatherError> {
    let url = self.build_api_url()?;

    let response = timeout(REQUEST_TIMEOUT, self.client.get(url).send())
      .await
      .map_err(|_| WeatherError::Timeout)??;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
      error!("API request failed with status: {}", status);
      return Err(WeatherError::NonSuccessStatus(status));
    }

    response
      .json::<OneCallResponse>()
      .await
      .map_err(|e| WeatherError::MalformedBody(format!("Failed to deserialize response: {}", e)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client() -> OpenWeatherClient {
    let config = WeatherConfig::new("test-key", "49.150002", "9.216600").unwrap();
    OpenWeatherClient::with_base_url(config, "https://api.example.com/data/3.0/onecall").unwrap()
  }

  #[test]
  fn api_url_carries_all_query_parameters() {
    let url = client().build_api_url().unwrap();
    let pairs: Vec<(String, String)> = url
      .query_pairs()
      .map(|(k, v)| (k.into_owned(), v.into_owned()))
      .collect();

    assert_eq!(
      pairs,
      vec![
        ("lat".to_string(), "49.150002".to_string()),
        ("lon".to_string(), "9.216600".to_string()),
        ("exclude".to_string(), "hourly,daily".to_string()),
        ("appid".to_string(), "test-key".to_string()),
      ]
    );
  }

  #[test]
  fn api_url_respects_base_url_override() {
    let url = client().build_api_url().unwrap();
    assert_eq!(url.host_str(), Some("api.example.com"));
    assert_eq!(url.path(), "/data/3.0/onecall");
  }
}
