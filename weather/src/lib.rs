// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use error::WeatherError;
pub use models::api::{CurrentConditions, OneCallResponse};
pub use models::weather::WeatherReading;
pub use service::{OpenWeatherClient, WeatherApi};

pub mod constants {
  use std::time::Duration;
  pub(crate) const API_BASE_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";
  pub(crate) const EXCLUDE_BLOCKS: &str = "hourly,daily";
  pub(crate) const KELVIN_OFFSET: f64 = 273.15;
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
  pub const DEFAULT_LATITUDE: &str = "49.150002";
  pub const DEFAULT_LONGITUDE: &str = "9.216600";
}
