/**
* filename : deriver
* date: 2026. 10. 19.
* description: Builds a wallet's reward feed from recently observed blocks.
**/

use log::debug;

use crate::chain::model::Block;
use super::types::RewardEvent;
use super::units::{BLOCK_REWARD, GENESIS_REWARD};

/// Reward for authoring the block at `index`.
pub fn block_reward(index: u64) -> u64 {
    if index == 0 {
        GENESIS_REWARD
    } else {
        BLOCK_REWARD
    }
}

/// Reward feed for `wallet_address`, in block order.
///
/// Explicit SYSTEM transactions paid to the wallet are reported as-is. A block
/// the wallet authored without any such transaction gets one synthetic reward
/// instead; the two never mix within a block.
pub fn derive_rewards(wallet_address: Option<&str>, blocks: &[Block]) -> Vec<RewardEvent> {
    let Some(address) = wallet_address else {
        return Vec::new();
    };

    let mut rewards = Vec::new();

    for block in blocks {
        let before = rewards.len();

        rewards.extend(
            block
                .transactions
                .iter()
                .filter(|tx| tx.is_system() && tx.receiver == address)
                .map(|tx| RewardEvent::explicit(tx, block.index)),
        );

        if rewards.len() == before && block.author == address {
            rewards.push(RewardEvent::synthetic(block));
        }
    }

    debug!(
        "[Rewards] Derived {} rewards for {} from {} blocks",
        rewards.len(),
        address,
        blocks.len()
    );

    rewards
}
