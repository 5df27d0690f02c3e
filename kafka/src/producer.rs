// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::{KafkaConfig, DELIVERY_TIMEOUT, MESSAGE_TIMEOUT_MS},
  error::KafkaError,
};
use rdkafka::{
  config::ClientConfig,
  producer::{FutureProducer, FutureRecord},
};
use tracing::{debug, instrument};

/// Append-only producer for the configured topic. Constructed once at
/// startup; the underlying client keeps its own connection pool.
pub struct ReadingProducer {
  producer: FutureProducer,
  topic: String,
}

impl ReadingProducer {
  pub fn new(config: &KafkaConfig) -> Result<Self, KafkaError> {
    let producer = ClientConfig::new()
      .set("bootstrap.servers", &config.brokers)
      .set("message.timeout.ms", MESSAGE_TIMEOUT_MS)
      .create()
      .map_err(KafkaError::Producer)?;

    Ok(Self {
      producer,
      topic: config.topic.clone(),
    })
  }

  /// Appends one record, keyless, and waits for the delivery report.
  #[instrument(skip(self, payload), fields(topic = %self.topic))]
  pub async fn send(&self, payload: Vec<u8>) -> Result<(), KafkaError> {
    let record = FutureRecord::<(), _>::to(&self.topic).payload(&payload);

    self
      .producer
      .send(record, DELIVERY_TIMEOUT)
      .await
      .map_err(|(err, _)| KafkaError::Delivery(err))?;

    debug!("Record appended");
    Ok(())
  }
}
