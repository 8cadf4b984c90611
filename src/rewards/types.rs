use serde::Serialize;

use crate::chain::model::{Block, Transaction, SYSTEM_SENDER};
use super::deriver::block_reward;

/// Signature carried by rewards reconstructed from block authorship.
pub const SYNTHETIC_SIGNATURE: &str = "reward";

/// Which derivation path produced a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardSource {
    /// SYSTEM transaction recorded in the block.
    Explicit,
    /// Reconstructed from block authorship.
    Synthetic,
}

/// Reward payout attributed to a wallet. Display-only, never ledger data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardEvent {
    pub id: String,
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
    pub timestamp: u64,
    pub block_index: u64,
    pub signature: String,
    pub source: RewardSource,
}

impl RewardEvent {
    /// Reward recorded on chain as a SYSTEM transaction.
    pub fn explicit(tx: &Transaction, block_index: u64) -> Self {
        Self {
            id: tx.id.clone(),
            sender: tx.sender.clone(),
            receiver: tx.receiver.clone(),
            amount: tx.amount,
            timestamp: tx.timestamp,
            block_index,
            signature: tx.signature.clone(),
            source: RewardSource::Explicit,
        }
    }

    /// Reward implied by authoring `block` when the chain recorded none.
    pub fn synthetic(block: &Block) -> Self {
        Self {
            id: format!("reward-{}", block.index),
            sender: SYSTEM_SENDER.to_string(),
            receiver: block.author.clone(),
            amount: block_reward(block.index),
            timestamp: block.timestamp,
            block_index: block.index,
            signature: SYNTHETIC_SIGNATURE.to_string(),
            source: RewardSource::Synthetic,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == RewardSource::Synthetic
    }
}
