// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::{MqttConfig, EVENT_LOOP_CAPACITY, KEEP_ALIVE},
  connection::{self, ConnectionState},
  error::MqttError,
};
use rumqttc::{AsyncClient, MqttOptions, QoS};
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Publishing half of the broker connection. Cheap to pass around; the
/// connection lifecycle itself is owned by [`MqttConnection`].
pub struct MqttPublisher {
  client: AsyncClient,
  topic: String,
  state: watch::Receiver<ConnectionState>,
}

/// Owns the background event-loop task. Whoever constructed it is
/// responsible for calling [`MqttConnection::shutdown`] on the way out.
pub struct MqttConnection {
  client: AsyncClient,
  event_loop_handle: Option<tokio::task::JoinHandle<()>>,
}

impl MqttPublisher {
  pub fn connect(config: MqttConfig) -> (MqttPublisher, MqttConnection) {
    let mut options = MqttOptions::new(config.client_id.as_str(), config.host.as_str(), config.port);
    options.set_keep_alive(KEEP_ALIVE);
    if let Some((username, password)) = config.credentials {
      options.set_credentials(username, password);
    }

    let (client, event_loop) = AsyncClient::new(options, EVENT_LOOP_CAPACITY);
    let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);

    let event_loop_handle = tokio::spawn(connection::run(event_loop, state_tx));

    (
      MqttPublisher {
        client: client.clone(),
        topic: config.topic,
        state: state_rx,
      },
      MqttConnection {
        client,
        event_loop_handle: Some(event_loop_handle),
      },
    )
  }

  // Returns the event loop as well: dropping it closes the client's
  // request channel and every publish would fail for the wrong reason.
  #[cfg(test)]
  fn with_state(topic: &str, state: watch::Receiver<ConnectionState>) -> (Self, rumqttc::EventLoop) {
    let (client, event_loop) = AsyncClient::new(
      MqttOptions::new("test-client", "localhost", 1883),
      EVENT_LOOP_CAPACITY,
    );

    (
      Self {
        client,
        topic: topic.to_string(),
        state,
      },
      event_loop,
    )
  }

  /// Blocks until the connect handshake resolves one way or the other.
  /// There is deliberately no timeout: a silent broker keeps us waiting, a
  /// failed or closed connection resolves immediately.
  pub async fn wait_connected(&self) -> Result<(), MqttError> {
    let mut state = self.state.clone();
    let observed = state
      .wait_for(|s| *s != ConnectionState::Connecting)
      .await
      .map_err(|_| MqttError::ConnectionClosed)?;

    match *observed {
      ConnectionState::Connected => Ok(()),
      _ => Err(MqttError::ConnectFailed),
    }
  }

  pub fn state(&self) -> ConnectionState {
    *self.state.borrow()
  }

  #[instrument(skip(self, payload), fields(topic = %self.topic))]
  pub async fn publish(&self, payload: Vec<u8>) -> Result<(), MqttError> {
    if *self.state.borrow() != ConnectionState::Connected {
      return Err(MqttError::NotConnected);
    }

    self
      .client
      .publish(self.topic.as_str(), QoS::AtMostOnce, false, payload)
      .await?;

    debug!("Message published");
    Ok(())
  }
}

impl MqttConnection {
  /// Sends the MQTT Disconnect packet and waits for the event loop to drain.
  pub async fn shutdown(mut self) {
    if let Err(e) = self.client.disconnect().await {
      warn!(error = %e, "Failed to disconnect MQTT client");
    }

    if let Some(handle) = self.event_loop_handle.take() {
      if let Err(e) = handle.await {
        warn!(error = %e, "Event loop task failed");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn publish_is_refused_until_connected() {
    let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);
    let (publisher, _event_loop) = MqttPublisher::with_state("iot/devices/open_weather", state_rx);

    let err = publisher.publish(b"{}".to_vec()).await.unwrap_err();
    assert!(matches!(err, MqttError::NotConnected));

    // Once the connect callback has reported success, the guard opens and
    // the message lands in the client's request queue.
    state_tx.send(ConnectionState::Connected).unwrap();
    assert!(publisher.publish(b"{}".to_vec()).await.is_ok());
  }

  #[tokio::test]
  async fn wait_connected_resolves_on_success() {
    let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);
    let (publisher, _event_loop) = MqttPublisher::with_state("iot/devices/open_weather", state_rx);

    state_tx.send(ConnectionState::Connected).unwrap();
    assert!(publisher.wait_connected().await.is_ok());
  }

  #[tokio::test]
  async fn wait_connected_fails_on_rejected_connection() {
    let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);
    let (publisher, _event_loop) = MqttPublisher::with_state("iot/devices/open_weather", state_rx);

    state_tx.send(ConnectionState::ShuttingDown).unwrap();
    assert!(matches!(
      publisher.wait_connected().await,
      Err(MqttError::ConnectFailed)
    ));
  }
}

