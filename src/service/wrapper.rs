use crate::chain::client::AgtClient;
use crate::chain::model::{Block, Wallet, WalletExport};
use crate::config::Settings;
use crate::service::{MemoryWalletService, RemoteWalletService, WalletService};
use crate::types::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// WalletService wrapper - picks the implementation from settings
pub enum ServiceWrapper {
    Memory(Arc<MemoryWalletService>),
    Remote(Arc<RemoteWalletService>),
}

impl ServiceWrapper {
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        if settings.service.memory_service {
            Ok(ServiceWrapper::Memory(Arc::new(MemoryWalletService::new(
                settings.dashboard.recent_blocks,
            ))))
        } else {
            let client = AgtClient::new(
                settings.service.api_url.clone(),
                Duration::from_secs(settings.service.timeout_secs),
            )?;
            Ok(ServiceWrapper::Remote(Arc::new(RemoteWalletService::new(
                client,
                settings.dashboard.recent_blocks,
            ))))
        }
    }
}

#[async_trait]
impl WalletService for ServiceWrapper {
    async fn get_wallet(&self) -> Result<Option<Wallet>, AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.get_wallet().await,
            ServiceWrapper::Remote(s) => s.get_wallet().await,
        }
    }

    async fn create_wallet(&self) -> Result<WalletExport, AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.create_wallet().await,
            ServiceWrapper::Remote(s) => s.create_wallet().await,
        }
    }

    async fn import_wallet(&self, key_or_mnemonic: &str) -> Result<(), AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.import_wallet(key_or_mnemonic).await,
            ServiceWrapper::Remote(s) => s.import_wallet(key_or_mnemonic).await,
        }
    }

    async fn refresh_wallet(&self) -> Result<(), AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.refresh_wallet().await,
            ServiceWrapper::Remote(s) => s.refresh_wallet().await,
        }
    }

    async fn refresh_block_height(&self) -> Result<u64, AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.refresh_block_height().await,
            ServiceWrapper::Remote(s) => s.refresh_block_height().await,
        }
    }

    async fn logout(&self) -> Result<(), AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.logout().await,
            ServiceWrapper::Remote(s) => s.logout().await,
        }
    }

    async fn get_recent_blocks(&self) -> Result<Vec<Block>, AppError> {
        match self {
            ServiceWrapper::Memory(s) => s.get_recent_blocks().await,
            ServiceWrapper::Remote(s) => s.get_recent_blocks().await,
        }
    }
}
