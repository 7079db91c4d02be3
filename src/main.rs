use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use beta_register_api::app::create_app;
use beta_register_api::config::Config;
use beta_register_api::state::SharedAppState;
use beta_register_api::utils::init_email_sender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env()?;

  let email_sender = init_email_sender(&config.email_provider)?;
  let app_state = SharedAppState::new(email_sender, config.sender.clone());
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(&config.bind_address)
    .await
    .with_context(|| format!("Failed to bind {}", config.bind_address))?;

  tracing::info!("Server running on http://{}", config.bind_address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
