use crate::chain::client::AgtClient;
use crate::chain::model::{Block, Wallet, WalletExport};
use crate::service::r#trait::WalletService;
use crate::types::AppError;
use async_trait::async_trait;
use log::info;

/// WalletService backed by a running AGT node over JSON-RPC.
pub struct RemoteWalletService {
    client: AgtClient,
    recent_blocks: usize,
}

impl RemoteWalletService {
    pub fn new(client: AgtClient, recent_blocks: usize) -> Self {
        Self { client, recent_blocks }
    }
}

#[async_trait]
impl WalletService for RemoteWalletService {
    async fn get_wallet(&self) -> Result<Option<Wallet>, AppError> {
        self.client.get_wallet().await
    }

    async fn create_wallet(&self) -> Result<WalletExport, AppError> {
        let export = self.client.create_wallet().await.map_err(|e| match e {
            AppError::Service(msg) => AppError::Import(msg),
            other => other,
        })?;
        info!("[RemoteService] Created wallet {}", export.address);
        Ok(export)
    }

    async fn import_wallet(&self, key_or_mnemonic: &str) -> Result<(), AppError> {
        self.client.import_wallet(key_or_mnemonic).await
    }

    async fn refresh_wallet(&self) -> Result<(), AppError> {
        self.client.refresh_wallet().await
    }

    async fn refresh_block_height(&self) -> Result<u64, AppError> {
        self.client.fetch_block_height().await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.client.logout().await
    }

    async fn get_recent_blocks(&self) -> Result<Vec<Block>, AppError> {
        self.client.fetch_recent_blocks(self.recent_blocks).await
    }
}
