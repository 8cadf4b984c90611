use crate::chain::model::{Block, Transaction, Wallet, WalletExport};
use crate::rewards::derive_rewards;
use crate::service::r#trait::WalletService;
use crate::types::AppError;
use async_trait::async_trait;
use log::{info, warn};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const MNEMONIC_WORDS: usize = 12;

const WORDLIST: [&str; 64] = [
    "acid", "amber", "anchor", "arrow", "atlas", "badge", "basil", "beacon",
    "birch", "blaze", "bloom", "cable", "cedar", "chalk", "cider", "cliff",
    "cobalt", "comet", "coral", "crane", "delta", "drift", "dune", "ember",
    "fable", "fern", "flint", "forge", "frost", "garnet", "glade", "granite",
    "harbor", "hazel", "helix", "iris", "ivory", "jade", "juniper", "kelp",
    "lagoon", "lantern", "lumen", "maple", "meadow", "mesa", "nectar", "nova",
    "oasis", "onyx", "orbit", "pebble", "pine", "prism", "quartz", "raven",
    "ridge", "saffron", "sierra", "summit", "tide", "umber", "willow", "zephyr",
];

/// In-process WalletService
/// Backs tests and offline runs; the chain is whatever `mine_block` appended.
#[derive(Clone)]
pub struct MemoryWalletService {
    state: Arc<RwLock<MemoryState>>,
    recent_blocks: usize,
}

#[derive(Default)]
struct MemoryState {
    // address -> wallet secrets and cached balance
    wallets: HashMap<String, StoredWallet>,
    active: Option<String>,
    blocks: Vec<Block>,
    block_height: u64,
    offline: bool,
    // single-operation failures
    fail_wallet_refresh: bool,
    fail_block_height: bool,
    fail_logout: bool,
}

#[derive(Clone)]
struct StoredWallet {
    private_key: String,
    mnemonic: String,
    balance: u64,
}

impl MemoryWalletService {
    pub fn new(recent_blocks: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState::default())),
            recent_blocks,
        }
    }

    /// Registers a wallet that can later be imported by key or mnemonic.
    pub async fn add_wallet(&self, export: WalletExport) {
        let mut state = self.state.write().await;
        state.wallets.insert(
            export.address,
            StoredWallet {
                private_key: export.private_key.to_lowercase(),
                mnemonic: normalize_mnemonic(&export.mnemonic),
                balance: 0,
            },
        );
    }

    /// Appends a block authored by `author` and returns it.
    pub async fn mine_block(&self, author: &str, transactions: Vec<Transaction>, timestamp: u64) -> Block {
        let mut state = self.state.write().await;
        let index = state.blocks.last().map(|b| b.index + 1).unwrap_or(0);
        let block = Block {
            index,
            timestamp,
            author: author.to_string(),
            transactions,
        };
        state.blocks.push(block.clone());
        block
    }

    /// While offline every chain call fails, as an unreachable node would.
    pub async fn set_offline(&self, offline: bool) {
        self.state.write().await.offline = offline;
    }

    /// Makes only `refresh_wallet` fail.
    pub async fn fail_wallet_refresh(&self, fail: bool) {
        self.state.write().await.fail_wallet_refresh = fail;
    }

    /// Makes only `refresh_block_height` fail.
    pub async fn fail_block_height(&self, fail: bool) {
        self.state.write().await.fail_block_height = fail;
    }

    /// Makes `logout` fail and leave the session active.
    pub async fn fail_logout(&self, fail: bool) {
        self.state.write().await.fail_logout = fail;
    }

    pub async fn block_height(&self) -> u64 {
        self.state.read().await.block_height
    }

    fn ensure_online(state: &MemoryState) -> Result<(), AppError> {
        if state.offline {
            Err(AppError::Service("wallet service is offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn injected(failing: bool, operation: &str) -> Result<(), AppError> {
        if failing {
            Err(AppError::Service(format!("{} failed", operation)))
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryWalletService {
    fn default() -> Self {
        Self::new(50)
    }
}

#[async_trait]
impl WalletService for MemoryWalletService {
    async fn get_wallet(&self) -> Result<Option<Wallet>, AppError> {
        let state = self.state.read().await;
        Ok(state.active.as_ref().and_then(|address| {
            state.wallets.get(address).map(|stored| Wallet {
                address: address.clone(),
                balance: stored.balance,
            })
        }))
    }

    async fn create_wallet(&self) -> Result<WalletExport, AppError> {
        let export = generate_export();

        let mut state = self.state.write().await;
        if state.wallets.contains_key(&export.address) {
            return Err(AppError::Import(format!("address collision for {}", export.address)));
        }
        state.wallets.insert(
            export.address.clone(),
            StoredWallet {
                private_key: export.private_key.clone(),
                mnemonic: export.mnemonic.clone(),
                balance: 0,
            },
        );
        state.active = Some(export.address.clone());

        info!("[MemoryService] Created wallet {}", export.address);
        Ok(export)
    }

    async fn import_wallet(&self, key_or_mnemonic: &str) -> Result<(), AppError> {
        let mnemonic = normalize_mnemonic(key_or_mnemonic);
        let key = mnemonic.trim_start_matches("0x");

        let mut state = self.state.write().await;
        let address = state
            .wallets
            .iter()
            .find(|(_, stored)| stored.private_key == key || stored.mnemonic == mnemonic)
            .map(|(address, _)| address.clone())
            .ok_or(AppError::InvalidKey)?;

        info!("[MemoryService] Imported wallet {}", address);
        state.active = Some(address);
        Ok(())
    }

    async fn refresh_wallet(&self) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        Self::ensure_online(&state)?;
        Self::injected(state.fail_wallet_refresh, "wallet refresh")?;

        let address = state.active.clone().ok_or(AppError::NoWallet)?;
        let balance = compute_balance(&address, &state.blocks);
        if let Some(stored) = state.wallets.get_mut(&address) {
            stored.balance = balance;
        }
        Ok(())
    }

    async fn refresh_block_height(&self) -> Result<u64, AppError> {
        let mut state = self.state.write().await;
        Self::ensure_online(&state)?;
        Self::injected(state.fail_block_height, "block height refresh")?;

        state.block_height = state.blocks.last().map(|b| b.index).unwrap_or(0);
        Ok(state.block_height)
    }

    async fn logout(&self) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        Self::injected(state.fail_logout, "logout")?;

        match state.active.take() {
            Some(address) => info!("[MemoryService] Logged out {}", address),
            None => warn!("[MemoryService] Logout requested without an active wallet"),
        }
        Ok(())
    }

    async fn get_recent_blocks(&self) -> Result<Vec<Block>, AppError> {
        let state = self.state.read().await;
        Self::ensure_online(&state)?;

        let skip = state.blocks.len().saturating_sub(self.recent_blocks);
        Ok(state.blocks[skip..].to_vec())
    }
}

/// Rewards (explicit or implied) plus transfers in, minus transfers out.
fn compute_balance(address: &str, blocks: &[Block]) -> u64 {
    let rewards: u64 = derive_rewards(Some(address), blocks)
        .iter()
        .map(|r| r.amount)
        .fold(0, u64::saturating_add);

    blocks
        .iter()
        .flat_map(|b| b.transactions.iter())
        .filter(|tx| !tx.is_system())
        .fold(rewards, |balance, tx| {
            if tx.receiver == address {
                balance.saturating_add(tx.amount)
            } else if tx.sender == address {
                balance.saturating_sub(tx.amount)
            } else {
                balance
            }
        })
}

fn normalize_mnemonic(input: &str) -> String {
    input
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn generate_export() -> WalletExport {
    let mut rng = rand::thread_rng();
    let private_key: [u8; 32] = rng.gen();
    let address: [u8; 20] = rng.gen();
    let mnemonic = (0..MNEMONIC_WORDS)
        .map(|_| WORDLIST[rng.gen_range(0..WORDLIST.len())])
        .collect::<Vec<_>>()
        .join(" ");

    WalletExport {
        address: format!("AGT{}", to_hex(&address)),
        private_key: to_hex(&private_key),
        mnemonic,
    }
}
