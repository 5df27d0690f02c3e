// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::message::OutboundMessage;
use anyhow::Result;
use async_trait::async_trait;
use kafka::ReadingProducer;
use mqtt::MqttPublisher;
use weather::WeatherReading;

/// Where a reading ends up. The two implementations are the two deployment
/// variants; the bridge loop does not care which one it drives.
#[async_trait]
pub trait Sink: Send + Sync {
  async fn publish(&mut self, reading: &WeatherReading) -> Result<()>;
}

/// Broker variant: wraps the reading with the source tag and device id,
/// serializes to JSON text and publishes to the configured topic.
pub struct MqttSink {
  publisher: MqttPublisher,
  device_id: String,
}

impl MqttSink {
  pub fn new(publisher: MqttPublisher, device_id: impl Into<String>) -> Self {
    Self {
      publisher,
      device_id: device_id.into(),
    }
  }
}

#[async_trait]
impl Sink for MqttSink {
  async fn publish(&mut self, reading: &WeatherReading) -> Result<()> {
    let message = OutboundMessage::new(self.device_id.as_str(), reading);
    let payload = serde_json::to_vec(&message)?;
    self.publisher.publish(payload).await?;
    Ok(())
  }
}

/// Log variant: appends the bare reading, no wrapper fields.
pub struct KafkaSink {
  producer: ReadingProducer,
}

impl KafkaSink {
  pub fn new(producer: ReadingProducer) -> Self {
    Self { producer }
  }
}

#[async_trait]
impl Sink for KafkaSink {
  async fn publish(&mut self, reading: &WeatherReading) -> Result<()> {
    let payload = serde_json::to_vec(reading)?;
    self.producer.send(payload).await?;
    Ok(())
  }
}
