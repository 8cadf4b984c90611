/**
* filename : model
* date: 2026. 10. 19.
* description: Chain and wallet records as served by the AGT wallet service.
**/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sender used by the chain for minted (reward) transactions.
pub const SYSTEM_SENDER: &str = "SYSTEM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
  pub index: u64,
  pub timestamp: u64,
  pub author: String,
  #[serde(default)]
  pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
  pub id: String,
  pub sender: String,
  pub receiver: String,
  pub amount: u64,
  pub timestamp: u64,
  pub signature: String,
}

impl Transaction {
  pub fn is_system(&self) -> bool {
    self.sender == SYSTEM_SENDER
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
  pub address: String,
  pub balance: u64,
}

/// Secrets handed out once after wallet creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletExport {
  pub address: String,
  pub private_key: String,
  pub mnemonic: String,
}

impl fmt::Debug for WalletExport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WalletExport")
      .field("address", &self.address)
      .field("private_key", &"<redacted>")
      .field("mnemonic", &"<redacted>")
      .finish()
  }
}
