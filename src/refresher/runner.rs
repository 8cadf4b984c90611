/**
* filename : runner
* date: 2026. 10. 19.
* description: Periodic dashboard refresh loop.
**/

use crate::dashboard::{render_dashboard, Dashboard};
use crate::service::WalletService;

use log::{info, warn};
use tokio::time::{interval, Duration};

pub async fn run_refresher<S: WalletService + ?Sized + 'static>(
  mut dashboard: Dashboard<S>,
  interval_duration: Duration,
) {
  let mut tick = interval(interval_duration);
  info!("[Refresher] Starting with interval {:?}", interval_duration);

  dashboard.load().await;
  info!("[Refresher] Initial view:\n{}", render_dashboard(&dashboard));

  loop {
    tick.tick().await;

    if dashboard.refresh().await {
      info!(
        "[Refresher] Refreshed ({} rewards, page {}/{})\n{}",
        dashboard.rewards().len(),
        dashboard.current_page(),
        dashboard.total_pages(),
        render_dashboard(&dashboard)
      );
    } else {
      let retry_delay = interval_duration / 2;
      warn!("[Refresher] Refresh failed | retrying in {:?}", retry_delay);
      tokio::time::sleep(retry_delay).await;
      tick.reset();
    }
  }
}
