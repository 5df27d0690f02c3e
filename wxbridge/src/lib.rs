// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod dotenv;
pub mod message;
pub mod runner;
pub mod signal;
pub mod sink;

pub use crate::{
  message::OutboundMessage,
  runner::Bridge,
  sink::{KafkaSink, MqttSink, Sink},
};
