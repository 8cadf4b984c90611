/**
* filename : tasks
* date: 2026. 10. 19.
* description: Spawns the long-running dashboard tasks.
**/
use std::time::Duration;
use tokio::task::JoinHandle;
use log::{error, info};

use crate::dashboard::Dashboard;
use crate::refresher::runner::run_refresher;
use crate::service::WalletService;
use crate::types::{Notification, NotificationReceiver};

pub fn spawn_refresher<S: WalletService + ?Sized + 'static>(
  dashboard: Dashboard<S>,
  interval_secs: u64,
) -> JoinHandle<()> {
  tokio::spawn(run_refresher(dashboard, Duration::from_secs(interval_secs)))
}

/// Drains user notifications into the log until every sender is gone.
pub fn spawn_notification_logger(mut receiver: NotificationReceiver) -> JoinHandle<()> {
  tokio::spawn(async move {
    while let Some(notification) = receiver.recv().await {
      match notification {
        Notification::Info(msg) => info!("[Notice] {}", msg),
        Notification::Error(msg) => error!("[Notice] {}", msg),
      }
    }
    info!("[Notice] Channel closed.");
  })
}
