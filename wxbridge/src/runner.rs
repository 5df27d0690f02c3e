// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::sink::Sink;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, instrument, warn};
use weather::{WeatherApi, WeatherReading};

/// The poll loop: fetch, transform, publish, sleep. Each iteration stands
/// alone; a failed cycle is logged and skipped, never fatal.
pub struct Bridge<S> {
  fetcher: Box<dyn WeatherApi>,
  sink: S,
  poll_interval: Duration,
}

impl<S: Sink> Bridge<S> {
  pub fn new(fetcher: Box<dyn WeatherApi>, sink: S, poll_interval: Duration) -> Self {
    Self {
      fetcher,
      sink,
      poll_interval,
    }
  }

  /// Runs until the shutdown flag flips. The flag is checked between
  /// cycles, so an in-flight publish finishes before the loop exits.
  #[instrument(skip(self, shutdown))]
  pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
    info!(interval = ?self.poll_interval, "Starting bridge loop");

    loop {
      self.cycle().await;

      tokio::select! {
        _ = tokio::time::sleep(self.poll_interval) => {}
        _ = shutdown.changed() => {
          info!("Shutdown requested, stopping bridge loop");
          break;
        }
      }
    }

    Ok(())
  }

  async fn cycle(&mut self) {
    let response = match self.fetcher.fetch_current().await {
      Ok(response) => response,
      Err(e) => {
        warn!("Failed to fetch weather data: {e}");
        return;
      }
    };

    let reading = match WeatherReading::from_response(response) {
      Ok(reading) => reading,
      Err(e) => {
        warn!("Skipping cycle: {e}");
        return;
      }
    };

    if let Err(e) = self.sink.publish(&reading).await {
      warn!("Failed to publish weather data: {e:#}");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::{Arc, Mutex};
  use weather::{CurrentConditions, OneCallResponse, WeatherError};

  enum FetchOutcome {
    Ok,
    MissingCurrent,
    ServerError,
  }

  struct StaticFetcher(FetchOutcome);

  #[async_trait]
  impl WeatherApi for StaticFetcher {
    async fn fetch_current(&self) -> Result<OneCallResponse, WeatherError> {
      match self.0 {
        FetchOutcome::Ok => Ok(OneCallResponse {
          current: Some(CurrentConditions {
            temp: 300.0,
            feels_like: 298.0,
            humidity: 55.0,
          }),
        }),
        FetchOutcome::MissingCurrent => Ok(OneCallResponse { current: None }),
        FetchOutcome::ServerError => Err(WeatherError::NonSuccessStatus(
          reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )),
      }
    }
  }

  #[derive(Clone, Default)]
  struct RecordingSink {
    published: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<WeatherReading>>>,
  }

  #[async_trait]
  impl Sink for RecordingSink {
    async fn publish(&mut self, reading: &WeatherReading) -> Result<()> {
      self.published.fetch_add(1, Ordering::SeqCst);
      *self.last.lock().unwrap() = Some(reading.clone());
      Ok(())
    }
  }

  fn bridge(outcome: FetchOutcome, sink: RecordingSink) -> Bridge<RecordingSink> {
    Bridge::new(
      Box::new(StaticFetcher(outcome)),
      sink,
      Duration::from_secs(10),
    )
  }

  #[tokio::test]
  async fn successful_cycle_publishes_converted_reading() {
    let sink = RecordingSink::default();
    let mut bridge = bridge(FetchOutcome::Ok, sink.clone());

    bridge.cycle().await;

    assert_eq!(sink.published.load(Ordering::SeqCst), 1);
    let reading = sink.last.lock().unwrap().clone().unwrap();
    assert_eq!(reading.temperature, 300.0 - 273.15);
    assert_eq!(reading.feels_like, 298.0 - 273.15);
    assert_eq!(reading.humidity, 55.0);
  }

  #[tokio::test]
  async fn failed_fetch_publishes_nothing() {
    let sink = RecordingSink::default();
    let mut bridge = bridge(FetchOutcome::ServerError, sink.clone());

    bridge.cycle().await;

    assert_eq!(sink.published.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn malformed_body_skips_the_cycle() {
    let sink = RecordingSink::default();
    let mut bridge = bridge(FetchOutcome::MissingCurrent, sink.clone());

    bridge.cycle().await;
    bridge.cycle().await;

    assert_eq!(sink.published.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn loop_exits_on_shutdown_signal() {
    let sink = RecordingSink::default();
    let bridge = bridge(FetchOutcome::Ok, sink.clone());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(bridge.run(shutdown_rx));
    shutdown_tx.send(true).unwrap();

    tokio::time::timeout(Duration::from_secs(1), handle)
      .await
      .expect("loop did not stop after shutdown")
      .unwrap()
      .unwrap();

    assert_eq!(sink.published.load(Ordering::SeqCst), 1);
  }
}
