// src/main.rs
/**
* date: 2026. 10. 19.
* description: Entry point for the AGT wallet dashboard.
**/

use agt_dashboard::config::Settings;
use agt_dashboard::dashboard::Dashboard;
use agt_dashboard::service::ServiceWrapper;
use agt_dashboard::shutdown::shutdown_signal;
use agt_dashboard::tasks::{spawn_notification_logger, spawn_refresher};
use agt_dashboard::types::AppError;

use log::info;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
  // 1. Initialize logging
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  info!("Application starting...");

  // 2. Load configuration
  let settings = Settings::new()?;
  let page_size = settings.dashboard.page_size()?;
  info!("Configuration loaded.");

  // 3. Connect the wallet service
  let service = Arc::new(ServiceWrapper::from_settings(&settings)?);
  info!(
    "Wallet service: {}",
    if settings.service.memory_service { "in-memory" } else { settings.service.api_url.as_str() }
  );

  // 4. Notification channel
  let (sender, receiver) = mpsc::unbounded_channel();
  let notice_handle = spawn_notification_logger(receiver);

  // 5. Optional startup import, failures become notifications
  let mut dashboard = Dashboard::new(service, page_size, sender);
  if let Some(key) = settings.dashboard.import_key.as_deref() {
    if dashboard.import_on_startup(key).await {
      info!("Startup import complete.");
    }
  }

  // 6. Spawn the refresher
  let refresher_handle = spawn_refresher(dashboard, settings.dashboard.refresh_interval_secs);

  // 7. Wait for shutdown signal
  shutdown_signal().await;
  info!("Shutdown signal received. Stopping tasks...");

  // 8. The refresher owns the last notification sender
  refresher_handle.abort();
  let _ = refresher_handle.await;
  let _ = notice_handle.await;

  info!("Application exited cleanly.");
  Ok(())
}
