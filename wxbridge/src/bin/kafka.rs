// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use kafka::{KafkaConfig, ReadingProducer, DEFAULT_BROKERS, DEFAULT_TOPIC};
use std::{env, time::Duration};
use tokio::sync::watch;
use tracing::{error, info};
use weather::{
  constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE},
  OpenWeatherClient, WeatherConfig,
};
use wxbridge::{signal, Bridge, KafkaSink};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

#[derive(Debug, Clone)]
struct ServiceConfig {
  api_key: String,
  latitude: String,
  longitude: String,
  brokers: String,
  topic: String,
  poll_interval: Duration,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

fn config_from_env() -> Result<ServiceConfig> {
  Ok(ServiceConfig {
    api_key: env::var("OPEN_WEATHER_API_KEY").context("Missing OPEN_WEATHER_API_KEY")?,
    latitude: env::var("LATITUDE").unwrap_or_else(|_| DEFAULT_LATITUDE.into()),
    longitude: env::var("LONGITUDE").unwrap_or_else(|_| DEFAULT_LONGITUDE.into()),
    brokers: env::var("KAFKA_BROKERS").unwrap_or_else(|_| DEFAULT_BROKERS.into()),
    topic: env::var("KAFKA_TOPIC").unwrap_or_else(|_| DEFAULT_TOPIC.into()),
    poll_interval: Duration::from_secs(
      env::var("POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_SECS.to_string())
        .parse()
        .context("POLL_INTERVAL_SECS must be a number of seconds")?,
    ),
  })
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  wxbridge::dotenv::load()?;
  setup_logging();

  let config = config_from_env()?;

  let weather_config = WeatherConfig::new(
    config.api_key.clone(),
    config.latitude.clone(),
    config.longitude.clone(),
  )?;
  let fetcher = OpenWeatherClient::new(weather_config)?;

  // One producer for the lifetime of the process; iterations reuse it.
  let kafka_config = KafkaConfig::new(config.brokers.clone(), config.topic.clone())?;
  let producer = ReadingProducer::new(&kafka_config)?;

  let (shutdown_tx, shutdown_rx) = watch::channel(false);
  tokio::spawn(async move {
    match signal::shutdown_signal().await {
      Ok(()) => {
        let _ = shutdown_tx.send(true);
      }
      Err(e) => error!("Failed to listen for shutdown signals: {e}"),
    }
  });

  let bridge = Bridge::new(
    Box::new(fetcher),
    KafkaSink::new(producer),
    config.poll_interval,
  );
  bridge.run(shutdown_rx).await?;

  info!("Bridge stopped");
  Ok(())
}
