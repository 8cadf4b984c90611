use std::fmt;

use chrono::{DateTime, Utc};

use crate::dashboard::dashboard::Dashboard;
use crate::dashboard::mode::DashboardMode;
use crate::rewards::{format_agt, RewardEvent};
use crate::service::WalletService;

/// Plain-text view of the dashboard.
pub fn render_dashboard<S: WalletService + ?Sized>(dashboard: &Dashboard<S>) -> String {
    DashboardView(dashboard).to_string()
}

/// `Display` adapter over a dashboard.
pub struct DashboardView<'a, S: WalletService + ?Sized>(pub &'a Dashboard<S>);

impl<S: WalletService + ?Sized> fmt::Display for DashboardView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.0;

        match dashboard.mode() {
            DashboardMode::NoWallet => {
                writeln!(f, "No wallet loaded.")?;
                writeln!(
                    f,
                    "Create a new wallet or import one with a private key or recovery phrase."
                )?;
            }
            DashboardMode::JustCreated(export) => {
                writeln!(f, "Wallet created: {}", export.address)?;
                writeln!(f, "Private key:     {}", export.private_key)?;
                writeln!(f, "Recovery phrase: {}", export.mnemonic)?;
                writeln!(f, "Store these somewhere safe. They will not be shown again.")?;
            }
            DashboardMode::Active(wallet) => {
                writeln!(f, "Address: {}", wallet.address)?;
                writeln!(f, "Balance: {}", format_agt(wallet.balance))?;
                if let Some(height) = dashboard.block_height() {
                    writeln!(f, "Block height: {}", height)?;
                }
                if dashboard.is_refreshing() {
                    writeln!(f, "Refreshing...")?;
                }
                writeln!(f)?;
                write_activity(f, dashboard)?;
            }
        }

        if dashboard.switch_state().is_open() {
            writeln!(f)?;
            writeln!(
                f,
                "Switch wallet? This logs out the current wallet and stops mining. [confirm / cancel]"
            )?;
        }

        Ok(())
    }
}

fn write_activity<S: WalletService + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    dashboard: &Dashboard<S>,
) -> fmt::Result {
    writeln!(f, "Recent activity")?;

    let page = dashboard.activity();
    if page.visible.is_empty() {
        writeln!(f, "  No rewards in recent blocks.")?;
    }
    for reward in page.visible {
        writeln!(f, "  {}", activity_row(reward))?;
    }

    writeln!(f, "Page {} / {}", page.page, page.total_pages)
}

/// One activity line; implied rewards are marked.
pub fn activity_row(reward: &RewardEvent) -> String {
    let amount = format!("+{}", format_agt(reward.amount));
    let implied = if reward.is_synthetic() { "  (implied)" } else { "" };
    format!(
        "{:>18}  block #{:<8}{}{}",
        amount,
        reward.block_index,
        format_timestamp(reward.timestamp),
        implied
    )
}

/// Unix seconds as `YYYY-MM-DD HH:MM:SS UTC`, raw seconds if out of range.
pub fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
