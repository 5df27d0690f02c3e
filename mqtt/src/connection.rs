// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use rumqttc::{ConnectReturnCode, Event, EventLoop, Outgoing, Packet};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Lifecycle of the broker connection. Every observer reads the state through
/// a `watch` channel owned by the event-loop task; nothing else writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
  Connecting,
  Connected,
  ShuttingDown,
}

/// Maps a broker event onto a state change. `Connected` is reachable only
/// through a successful ConnAck; every rejection or disconnect ends the
/// connection.
fn transition(event: &Event) -> Option<ConnectionState> {
  match event {
    Event::Incoming(Packet::ConnAck(ack)) if ack.code == ConnectReturnCode::Success => {
      Some(ConnectionState::Connected)
    }
    Event::Incoming(Packet::ConnAck(ack)) => {
      error!("Broker rejected connection: {:?}", ack.code);
      Some(ConnectionState::ShuttingDown)
    }
    Event::Incoming(Packet::Disconnect) | Event::Outgoing(Outgoing::Disconnect) => {
      Some(ConnectionState::ShuttingDown)
    }
    _ => None,
  }
}

/// Drives the rumqttc event loop until the connection ends. No reconnect
/// here: a transport error or a rejected ConnAck terminates the task and the
/// supervisor restart is the recovery path.
pub(crate) async fn run(mut event_loop: EventLoop, state_tx: watch::Sender<ConnectionState>) {
  loop {
    match event_loop.poll().await {
      Ok(event) => {
        debug!(notification = ?event, "MQTT event");

        match transition(&event) {
          Some(ConnectionState::Connected) => {
            info!("Connected to MQTT broker");
            let _ = state_tx.send(ConnectionState::Connected);
          }
          Some(ConnectionState::ShuttingDown) => {
            let _ = state_tx.send(ConnectionState::ShuttingDown);
            break;
          }
          _ => {}
        }
      }
      Err(err) => {
        error!(error = %err, "MQTT event loop error");
        let _ = state_tx.send(ConnectionState::ShuttingDown);
        break;
      }
    }
  }

  info!("MQTT event loop terminated");
}

#[cfg(test)]
mod tests {
  use super::*;
  use rumqttc::ConnAck;

  fn connack(code: ConnectReturnCode) -> Event {
    Event::Incoming(Packet::ConnAck(ConnAck {
      session_present: false,
      code,
    }))
  }

  #[test]
  fn successful_connack_connects() {
    assert_eq!(
      transition(&connack(ConnectReturnCode::Success)),
      Some(ConnectionState::Connected)
    );
  }

  #[test]
  fn rejected_connack_never_connects() {
    for code in [
      ConnectReturnCode::BadUserNamePassword,
      ConnectReturnCode::NotAuthorized,
      ConnectReturnCode::ServiceUnavailable,
    ] {
      assert_eq!(
        transition(&connack(code)),
        Some(ConnectionState::ShuttingDown)
      );
    }
  }

  #[test]
  fn disconnect_shuts_down() {
    assert_eq!(
      transition(&Event::Incoming(Packet::Disconnect)),
      Some(ConnectionState::ShuttingDown)
    );
    assert_eq!(
      transition(&Event::Outgoing(Outgoing::Disconnect)),
      Some(ConnectionState::ShuttingDown)
    );
  }

  #[test]
  fn unrelated_events_leave_state_alone() {
    assert_eq!(transition(&Event::Incoming(Packet::PingResp)), None);
    assert_eq!(transition(&Event::Outgoing(Outgoing::PingReq)), None);
  }
}
