use crate::chain::model::{Block, Wallet, WalletExport};
use crate::types::AppError;
use async_trait::async_trait;

/// Capabilities of the external wallet/chain service.
///
/// Key generation, balance computation and chain sync all happen behind this
/// trait; the dashboard only calls it.
#[async_trait]
pub trait WalletService: Send + Sync {
    /// Active wallet, if a session is open.
    async fn get_wallet(&self) -> Result<Option<Wallet>, AppError>;

    /// Creates and activates a new wallet, returning its secrets once.
    async fn create_wallet(&self) -> Result<WalletExport, AppError>;

    /// Activates the wallet behind a hex private key or a 12 word mnemonic.
    async fn import_wallet(&self, key_or_mnemonic: &str) -> Result<(), AppError>;

    /// Recomputes the active wallet's balance.
    async fn refresh_wallet(&self) -> Result<(), AppError>;

    /// Re-reads the chain tip, returning the latest block index.
    async fn refresh_block_height(&self) -> Result<u64, AppError>;

    /// Ends the session and stops background mining/sync.
    async fn logout(&self) -> Result<(), AppError>;

    /// Recently observed blocks, ordered by index.
    async fn get_recent_blocks(&self) -> Result<Vec<Block>, AppError>;
}
