use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use agt_dashboard::chain::model::{Block, Transaction, Wallet, WalletExport, SYSTEM_SENDER};
use agt_dashboard::dashboard::{render_dashboard, Dashboard, DashboardMode, SwitchConfirm};
use agt_dashboard::rewards::{BLOCK_REWARD, GENESIS_REWARD, ONE_AGT};
use agt_dashboard::service::{MemoryWalletService, WalletService};
use agt_dashboard::types::{AppError, Notification, NotificationReceiver};
use async_trait::async_trait;
use tokio::sync::mpsc;

fn export(address: &str, key_byte: &str, first_word: &str) -> WalletExport {
  WalletExport {
    address: address.to_string(),
    private_key: key_byte.repeat(32),
    mnemonic: format!("{} amber anchor arrow atlas badge basil beacon birch blaze bloom cable", first_word),
  }
}

fn dashboard(
  service: &Arc<MemoryWalletService>,
) -> (Dashboard<MemoryWalletService>, NotificationReceiver) {
  let (sender, receiver) = mpsc::unbounded_channel();
  let page_size = NonZeroUsize::new(6).unwrap();
  (Dashboard::new(service.clone(), page_size, sender), receiver)
}

fn drain(receiver: &mut NotificationReceiver) -> Vec<Notification> {
  let mut out = Vec::new();
  while let Ok(n) = receiver.try_recv() {
    out.push(n);
  }
  out
}

fn errors(notifications: &[Notification]) -> usize {
  notifications
    .iter()
    .filter(|n| matches!(n, Notification::Error(_)))
    .count()
}

/// Two known wallets; A authored 13 blocks, B authored 2.
async fn seeded_service() -> Arc<MemoryWalletService> {
  let service = Arc::new(MemoryWalletService::new(100));
  service.add_wallet(export("AGTwalletA", "aa", "acid")).await;
  service.add_wallet(export("AGTwalletB", "bb", "cedar")).await;

  for i in 0..13 {
    service.mine_block("AGTwalletA", vec![], 1_700_000_000 + i * 60).await;
  }
  service.mine_block("AGTwalletB", vec![], 1_700_001_000).await;
  service.mine_block("AGTwalletB", vec![], 1_700_001_060).await;
  service
}

#[tokio::test]
async fn starts_without_wallet() {
  let service = Arc::new(MemoryWalletService::new(10));
  let (mut dash, _rx) = dashboard(&service);

  dash.load().await;

  assert_eq!(dash.mode(), &DashboardMode::NoWallet);
  assert!(dash.rewards().is_empty());
  assert_eq!(dash.activity().total_pages, 1);
  assert!(render_dashboard(&dash).contains("No wallet loaded."));
}

#[tokio::test]
async fn created_wallet_shows_export_until_acknowledged() -> eyre::Result<()> {
  let service = Arc::new(MemoryWalletService::new(10));
  let (mut dash, mut rx) = dashboard(&service);
  dash.load().await;

  dash.create_wallet().await;

  let created = match dash.mode() {
    DashboardMode::JustCreated(export) => export.clone(),
    other => eyre::bail!("expected export screen, got {:?}", other),
  };
  assert!(created.address.starts_with("AGT"));
  assert_eq!(created.private_key.len(), 64);
  assert_eq!(created.mnemonic.split(' ').count(), 12);
  assert!(render_dashboard(&dash).contains(&created.mnemonic));
  assert!(matches!(drain(&mut rx).as_slice(), [Notification::Info(_)]));

  // the refresher must not skip past the export screen
  assert!(dash.refresh().await);
  assert!(matches!(dash.mode(), DashboardMode::JustCreated(_)));

  dash.acknowledge_export().await;

  let wallet = dash.mode().wallet().cloned().expect("active wallet");
  assert_eq!(wallet.address, created.address);
  assert_eq!(wallet.balance, 0);
  Ok(())
}

#[tokio::test]
async fn import_by_mnemonic_loads_rewards() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);

  let ok = dash
    .import_wallet("  CEDAR amber anchor arrow atlas badge basil beacon birch blaze bloom   cable ")
    .await;

  assert!(ok);
  assert_eq!(dash.mode().wallet().map(|w| w.address.as_str()), Some("AGTwalletB"));
  let ids: Vec<_> = dash.rewards().iter().map(|r| r.id.as_str()).collect();
  assert_eq!(ids, vec!["reward-13", "reward-14"]);
  assert_eq!(errors(&drain(&mut rx)), 0);
}

#[tokio::test]
async fn import_rejects_empty_and_unknown_keys() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);

  assert!(!dash.import_wallet("   ").await);
  assert!(!dash.import_wallet(&"cc".repeat(32)).await);

  let notes = drain(&mut rx);
  assert_eq!(
    notes,
    vec![
      Notification::Error("Invalid private key or mnemonic".to_string()),
      Notification::Error("Invalid private key or mnemonic".to_string()),
    ]
  );
  assert_eq!(dash.mode(), &DashboardMode::NoWallet);
}

#[tokio::test]
async fn refresh_updates_balance_and_height() -> eyre::Result<()> {
  let service = seeded_service().await;
  let (mut dash, _rx) = dashboard(&service);
  dash.import_wallet(&"AA".repeat(32)).await;

  service
    .mine_block(
      "AGTwalletB",
      vec![Transaction {
        id: "bonus".to_string(),
        sender: SYSTEM_SENDER.to_string(),
        receiver: "AGTwalletA".to_string(),
        amount: 2 * ONE_AGT,
        timestamp: 1_700_002_000,
        signature: "sys".to_string(),
      }],
      1_700_002_000,
    )
    .await;

  assert!(dash.refresh().await);

  let wallet = dash.mode().wallet().cloned().expect("active wallet");
  assert_eq!(wallet.balance, GENESIS_REWARD + 12 * BLOCK_REWARD + 2 * ONE_AGT);
  assert_eq!(dash.block_height(), Some(15));
  assert_eq!(service.block_height().await, 15);
  assert_eq!(dash.rewards().len(), 14);
  assert_eq!(dash.rewards().last().map(|r| r.block_index), Some(15));
  Ok(())
}

#[tokio::test]
async fn failed_refresh_surfaces_one_error() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;
  drain(&mut rx);

  service.set_offline(true).await;
  assert!(!dash.refresh().await);

  let notes = drain(&mut rx);
  assert_eq!(errors(&notes), 1);
  assert_eq!(
    notes,
    vec![Notification::Error("Wallet service error: wallet service is offline".to_string())]
  );
  assert!(dash.mode().wallet().is_some());
}

#[tokio::test]
async fn paging_through_activity() {
  let service = seeded_service().await;
  let (mut dash, _rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;

  assert_eq!(dash.rewards().len(), 13);
  assert_eq!(dash.total_pages(), 3);

  dash.next_page();
  let page = dash.activity();
  assert_eq!(page.page, 2);
  assert_eq!(page.visible.first().map(|r| r.id.as_str()), Some("reward-6"));

  dash.jump_to_page(99);
  let page = dash.activity();
  assert_eq!(page.page, 3);
  assert_eq!(page.visible.len(), 1);
  assert!(render_dashboard(&dash).contains("Page 3 / 3"));

  dash.next_page();
  assert_eq!(dash.current_page(), 3);

  dash.jump_to_page(0);
  assert_eq!(dash.current_page(), 1);
  dash.previous_page();
  assert_eq!(dash.current_page(), 1);
}

#[tokio::test]
async fn cancelled_switch_keeps_session() {
  let service = seeded_service().await;
  let (mut dash, _rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;

  dash.request_switch();
  assert_eq!(dash.switch_state(), SwitchConfirm::Open);
  assert!(render_dashboard(&dash).contains("Switch wallet?"));

  dash.cancel_switch();
  assert_eq!(dash.switch_state(), SwitchConfirm::Closed);

  // confirm without an open modal does nothing
  dash.confirm_switch().await;
  assert!(dash.mode().wallet().is_some());
  assert!(service.get_wallet().await.unwrap().is_some());
}

#[tokio::test]
async fn switching_wallets_resets_page() {
  let service = seeded_service().await;
  let (mut dash, _rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;

  dash.next_page();
  assert_eq!(dash.current_page(), 2);

  dash.request_switch();
  dash.confirm_switch().await;

  assert_eq!(dash.switch_state(), SwitchConfirm::Closed);
  assert_eq!(dash.mode(), &DashboardMode::NoWallet);
  assert!(service.get_wallet().await.unwrap().is_none());

  dash.import_wallet(&"bb".repeat(32)).await;

  assert_eq!(dash.mode().wallet().map(|w| w.address.as_str()), Some("AGTwalletB"));
  assert_eq!(dash.current_page(), 1);
  assert_eq!(dash.activity().page, 1);
}

#[tokio::test]
async fn importing_over_active_wallet_resets_page() {
  let service = seeded_service().await;
  let (mut dash, _rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;
  dash.jump_to_page(3);

  dash.import_wallet(&"bb".repeat(32)).await;

  assert_eq!(dash.current_page(), 1);
}

#[test]
fn activity_timestamps_render_in_utc() {
  use agt_dashboard::dashboard::render::format_timestamp;

  assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
  assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
  assert_eq!(format_timestamp(u64::MAX), u64::MAX.to_string());
}

/// Memory service whose `get_wallet` can be switched to fail.
struct UnreachableWallet {
  inner: Arc<MemoryWalletService>,
  fail_get_wallet: AtomicBool,
}

#[async_trait]
impl WalletService for UnreachableWallet {
  async fn get_wallet(&self) -> Result<Option<Wallet>, AppError> {
    if self.fail_get_wallet.load(Ordering::SeqCst) {
      return Err(AppError::Service("wallet lookup failed".to_string()));
    }
    self.inner.get_wallet().await
  }

  async fn create_wallet(&self) -> Result<WalletExport, AppError> {
    self.inner.create_wallet().await
  }

  async fn import_wallet(&self, key_or_mnemonic: &str) -> Result<(), AppError> {
    self.inner.import_wallet(key_or_mnemonic).await
  }

  async fn refresh_wallet(&self) -> Result<(), AppError> {
    self.inner.refresh_wallet().await
  }

  async fn refresh_block_height(&self) -> Result<u64, AppError> {
    self.inner.refresh_block_height().await
  }

  async fn logout(&self) -> Result<(), AppError> {
    self.inner.logout().await
  }

  async fn get_recent_blocks(&self) -> Result<Vec<Block>, AppError> {
    self.inner.get_recent_blocks().await
  }
}

fn unreachable_dashboard(
  inner: Arc<MemoryWalletService>,
) -> (Arc<UnreachableWallet>, Dashboard<UnreachableWallet>, NotificationReceiver) {
  let service = Arc::new(UnreachableWallet {
    inner,
    fail_get_wallet: AtomicBool::new(false),
  });
  let (sender, receiver) = mpsc::unbounded_channel();
  let dash = Dashboard::new(service.clone(), NonZeroUsize::new(6).unwrap(), sender);
  (service, dash, receiver)
}

#[tokio::test]
async fn refresh_fails_when_reload_after_join_fails() {
  let (service, mut dash, mut rx) = unreachable_dashboard(seeded_service().await);
  assert!(dash.import_wallet(&"aa".repeat(32)).await);
  drain(&mut rx);

  service.fail_get_wallet.store(true, Ordering::SeqCst);
  let ok = dash.refresh().await;

  assert!(!ok);
  assert_eq!(errors(&drain(&mut rx)), 1);
  assert!(!dash.is_refreshing());
  assert!(dash.mode().wallet().is_some());
}

#[tokio::test]
async fn refresh_without_wallet_fails_when_lookup_fails() {
  let (service, mut dash, mut rx) = unreachable_dashboard(seeded_service().await);
  assert!(dash.load().await);
  assert_eq!(dash.mode(), &DashboardMode::NoWallet);

  service.fail_get_wallet.store(true, Ordering::SeqCst);

  assert!(!dash.refresh().await);
  assert_eq!(errors(&drain(&mut rx)), 1);
}

#[tokio::test]
async fn refresh_indicator_clears_after_success_and_failure() {
  let service = seeded_service().await;
  let (mut dash, _rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;
  assert!(!dash.is_refreshing());

  assert!(dash.refresh().await);
  assert!(!dash.is_refreshing());

  service.set_offline(true).await;
  assert!(!dash.refresh().await);
  assert!(!dash.is_refreshing());
}

#[tokio::test]
async fn block_height_failure_alone_fails_refresh() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;
  drain(&mut rx);

  service.fail_block_height(true).await;

  assert!(!dash.refresh().await);
  assert_eq!(
    drain(&mut rx),
    vec![Notification::Error("Wallet service error: block height refresh failed".to_string())]
  );
  assert_eq!(dash.block_height(), None);
  assert!(!dash.is_refreshing());
}

#[tokio::test]
async fn wallet_refresh_failure_alone_fails_refresh() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;
  drain(&mut rx);

  service.fail_wallet_refresh(true).await;

  assert!(!dash.refresh().await);
  assert_eq!(
    drain(&mut rx),
    vec![Notification::Error("Wallet service error: wallet refresh failed".to_string())]
  );
  // the height call still ran to completion
  assert_eq!(service.block_height().await, 14);
}

#[tokio::test]
async fn failed_logout_closes_modal_and_reloads() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);
  dash.import_wallet(&"aa".repeat(32)).await;
  dash.next_page();
  drain(&mut rx);

  service.fail_logout(true).await;
  dash.request_switch();
  dash.confirm_switch().await;

  assert_eq!(dash.switch_state(), SwitchConfirm::Closed);
  assert_eq!(
    drain(&mut rx),
    vec![Notification::Error("Wallet service error: logout failed".to_string())]
  );
  // session is still active on the service, so the view stays on it
  assert_eq!(dash.mode().wallet().map(|w| w.address.as_str()), Some("AGTwalletA"));
  assert_eq!(dash.current_page(), 2);
}

#[tokio::test]
async fn startup_import_failure_is_notified() {
  let service = seeded_service().await;
  let (mut dash, mut rx) = dashboard(&service);

  assert!(!dash.import_on_startup(&"cc".repeat(32)).await);

  assert_eq!(
    drain(&mut rx),
    vec![Notification::Error("Invalid private key or mnemonic".to_string())]
  );
  assert_eq!(dash.mode(), &DashboardMode::NoWallet);
}

#[tokio::test]
async fn startup_import_skips_when_wallet_active() {
  let service = seeded_service().await;
  service.import_wallet(&"bb".repeat(32)).await.unwrap();
  let (mut dash, mut rx) = dashboard(&service);

  assert!(dash.import_on_startup(&"aa".repeat(32)).await);

  assert_eq!(dash.mode().wallet().map(|w| w.address.as_str()), Some("AGTwalletB"));
  assert!(drain(&mut rx).is_empty());
}
