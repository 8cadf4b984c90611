/**
* filename : dashboard
* date: 2026. 10. 19.
* description: Wallet dashboard state driven by an injected WalletService.
**/

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::{error, info, warn};

use crate::chain::model::Block;
use crate::dashboard::mode::DashboardMode;
use crate::dashboard::switch::SwitchConfirm;
use crate::rewards::paginator::total_pages;
use crate::rewards::{derive_rewards, paginate, Page, PageCursor, RewardEvent};
use crate::service::WalletService;
use crate::types::{AppError, Notification, NotificationSender};

pub struct Dashboard<S: WalletService + ?Sized> {
    service: Arc<S>,
    notifier: NotificationSender,
    page_size: NonZeroUsize,
    mode: DashboardMode,
    blocks: Vec<Block>,
    rewards: Vec<RewardEvent>,
    cursor: PageCursor,
    switch: SwitchConfirm,
    block_height: Option<u64>,
    refreshing: bool,
}

impl<S: WalletService + ?Sized> Dashboard<S> {
    pub fn new(service: Arc<S>, page_size: NonZeroUsize, notifier: NotificationSender) -> Self {
        Self {
            service,
            notifier,
            page_size,
            mode: DashboardMode::NoWallet,
            blocks: Vec::new(),
            rewards: Vec::new(),
            cursor: PageCursor::new(),
            switch: SwitchConfirm::default(),
            block_height: None,
            refreshing: false,
        }
    }

    pub fn mode(&self) -> &DashboardMode {
        &self.mode
    }

    pub fn rewards(&self) -> &[RewardEvent] {
        &self.rewards
    }

    pub fn block_height(&self) -> Option<u64> {
        self.block_height
    }

    pub fn switch_state(&self) -> SwitchConfirm {
        self.switch
    }

    /// True while the balance and block height refresh are in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn current_page(&self) -> usize {
        self.cursor.current()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.rewards.len(), self.page_size)
    }

    /// Visible slice of the reward feed for the current page.
    pub fn activity(&self) -> Page<'_, RewardEvent> {
        paginate(&self.rewards, self.page_size, self.cursor.current() as i64)
    }

    pub fn previous_page(&mut self) {
        self.cursor.previous();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.cursor.next(total);
    }

    pub fn jump_to_page(&mut self, page: i64) {
        let total = self.total_pages();
        self.cursor.jump(page, total);
    }

    /// Pulls the active wallet and recent blocks from the service.
    ///
    /// On failure the previous view stays up, the error is notified and
    /// false is returned.
    pub async fn load(&mut self) -> bool {
        match self.try_load().await {
            Ok(()) => true,
            Err(e) => {
                self.notify_error(&e);
                false
            }
        }
    }

    async fn try_load(&mut self) -> Result<(), AppError> {
        match self.service.get_wallet().await? {
            Some(wallet) => self.set_mode(DashboardMode::Active(wallet)),
            None => self.set_mode(DashboardMode::NoWallet),
        }

        self.reload_blocks().await
    }

    async fn reload_blocks(&mut self) -> Result<(), AppError> {
        if self.mode.address().is_none() {
            self.blocks.clear();
        } else {
            self.blocks = self.service.get_recent_blocks().await?;
        }
        self.recompute();
        Ok(())
    }

    pub async fn create_wallet(&mut self) {
        match self.service.create_wallet().await {
            Ok(export) => {
                info!("[Dashboard] Wallet {} created, awaiting backup", export.address);
                self.notify(Notification::Info(
                    "Wallet created. Back up your private key and recovery phrase.".to_string(),
                ));
                self.set_mode(DashboardMode::JustCreated(export));
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Leaves the one-time export screen for the normal view.
    pub async fn acknowledge_export(&mut self) {
        if matches!(self.mode, DashboardMode::JustCreated(_)) {
            self.load().await;
        }
    }

    /// Imports `key_or_mnemonic` unless the service already has an active
    /// wallet. Failures are notified like any other import.
    pub async fn import_on_startup(&mut self, key_or_mnemonic: &str) -> bool {
        if !self.load().await {
            return false;
        }
        if self.mode.wallet().is_some() {
            info!("[Dashboard] Wallet already active, skipping startup import");
            return true;
        }
        self.import_wallet(key_or_mnemonic).await
    }

    /// Returns whether the import succeeded and the view reloaded.
    pub async fn import_wallet(&mut self, key_or_mnemonic: &str) -> bool {
        let input = key_or_mnemonic.trim();
        if input.is_empty() {
            self.notify_error(&AppError::InvalidKey);
            return false;
        }

        match self.service.import_wallet(input).await {
            Ok(()) => {
                self.notify(Notification::Info("Wallet imported.".to_string()));
                self.load().await
            }
            Err(e) => {
                self.notify_error(&e);
                false
            }
        }
    }

    /// Refreshes balance and block height together, then reloads the view.
    ///
    /// Both calls run to completion; if either fails one error is notified.
    pub async fn refresh(&mut self) -> bool {
        match self.mode {
            DashboardMode::JustCreated(_) => return true,
            DashboardMode::NoWallet => return self.load().await,
            DashboardMode::Active(_) => {}
        }

        self.refreshing = true;
        let (wallet, height) = tokio::join!(
            self.service.refresh_wallet(),
            self.service.refresh_block_height()
        );
        self.refreshing = false;

        match wallet.and(height) {
            Ok(height) => {
                self.block_height = Some(height);
                self.load().await
            }
            Err(e) => {
                self.notify_error(&e);
                false
            }
        }
    }

    pub fn request_switch(&mut self) {
        self.switch.request_switch();
    }

    pub fn cancel_switch(&mut self) {
        self.switch.cancel();
    }

    /// Logs out through the service if the confirmation modal is open.
    pub async fn confirm_switch(&mut self) {
        if !self.switch.confirm() {
            return;
        }

        match self.service.logout().await {
            Ok(()) => info!("[Dashboard] Logged out, ready for another wallet"),
            Err(e) => self.notify_error(&e),
        }

        self.load().await;
    }

    fn set_mode(&mut self, mode: DashboardMode) {
        if mode.address() != self.mode.address() {
            info!(
                "[Dashboard] Wallet changed: {:?} -> {:?}, resetting activity page",
                self.mode.address(),
                mode.address()
            );
            self.cursor.reset();
        }
        self.mode = mode;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.rewards = derive_rewards(self.mode.address(), &self.blocks);
        self.cursor.clamp_to(total_pages(self.rewards.len(), self.page_size));
    }

    fn notify(&self, notification: Notification) {
        if self.notifier.send(notification).is_err() {
            warn!("[Dashboard] Notification receiver dropped");
        }
    }

    fn notify_error(&self, err: &AppError) {
        error!("[Dashboard] {}", err);
        self.notify(Notification::Error(err.to_string()));
    }
}
