// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

/// Resolves when the process receives SIGINT or SIGTERM. The caller owns
/// what happens next; this function only reports the request.
pub async fn shutdown_signal() -> std::io::Result<()> {
  let mut terminate = signal(SignalKind::terminate())?;

  tokio::select! {
    _ = tokio::signal::ctrl_c() => info!("Received SIGINT"),
    _ = terminate.recv() => info!("Received SIGTERM"),
  }

  Ok(())
}
