// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use mqtt::{MqttConfig, MqttPublisher, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TOPIC};
use std::{env, time::Duration};
use tokio::sync::watch;
use tracing::{error, info};
use weather::{
  constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE},
  OpenWeatherClient, WeatherConfig,
};
use wxbridge::{signal, Bridge, MqttSink};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 120;
const DEFAULT_DEVICE_ID: &str = "open_weather";

#[derive(Debug, Clone)]
struct ServiceConfig {
  api_key: String,
  latitude: String,
  longitude: String,
  host: String,
  port: u16,
  device_id: String,
  topic: String,
  username: Option<String>,
  password: Option<String>,
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
    host: env::var("MQTT_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
    port: env::var("MQTT_PORT")
      .unwrap_or_else(|_| DEFAULT_PORT.to_string())
      .parse()
      .context("MQTT_PORT must be a port number")?,
    device_id: env::var("MQTT_DEVICE_ID").unwrap_or_else(|_| DEFAULT_DEVICE_ID.into()),
    topic: env::var("MQTT_TOPIC").unwrap_or_else(|_| DEFAULT_TOPIC.into()),
    username: env::var("MQTT_USERNAME").ok(),
    password: env::var("MQTT_PASSWORD").ok(),
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

  let mut mqtt_config = MqttConfig::new(
    config.host.clone(),
    config.port,
    config.device_id.clone(),
    config.topic.clone(),
  )?;
  if let (Some(username), Some(password)) = (config.username.clone(), config.password.clone()) {
    mqtt_config = mqtt_config.with_credentials(username, password);
  }

  let (publisher, connection) = MqttPublisher::connect(mqtt_config);

  info!("Waiting for MQTT broker connection");
  if let Err(e) = publisher.wait_connected().await {
    error!("Could not establish MQTT connection: {e}");
    connection.shutdown().await;
    return Err(e.into());
  }

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
    MqttSink::new(publisher, config.device_id.clone()),
    config.poll_interval,
  );
  bridge.run(shutdown_rx).await?;

  connection.shutdown().await;
  info!("Bridge stopped");
  Ok(())
}
