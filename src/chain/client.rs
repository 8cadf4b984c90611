/**
* filename : client
* date: 2026. 10. 19.
* description: HTTP client for the AGT wallet service.
**/

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

use crate::chain::model::{Block, Wallet, WalletExport};
use crate::chain::rpc::JsonRpcClient;
use crate::types::AppError;

#[derive(Clone)]
pub struct AgtClient {
  client: Client,
  api_url: String,
}

impl AgtClient {
  pub fn new(api_url: String, timeout: Duration) -> Result<Self, AppError> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self { client, api_url })
  }

  pub async fn get_wallet(&self) -> Result<Option<Wallet>, AppError> {
    self.call("wallet_get", json!([])).await
  }

  pub async fn create_wallet(&self) -> Result<WalletExport, AppError> {
    self.call("wallet_create", json!([])).await
  }

  pub async fn import_wallet(&self, key_or_mnemonic: &str) -> Result<(), AppError> {
    self.call("wallet_import", json!([key_or_mnemonic])).await
  }

  pub async fn refresh_wallet(&self) -> Result<(), AppError> {
    self.call("wallet_refresh", json!([])).await
  }

  pub async fn logout(&self) -> Result<(), AppError> {
    self.call("wallet_logout", json!([])).await
  }

  pub async fn fetch_block_height(&self) -> Result<u64, AppError> {
    self.call("chain_blockHeight", json!([])).await
  }

  pub async fn fetch_recent_blocks(&self, limit: usize) -> Result<Vec<Block>, AppError> {
    self.call("chain_recentBlocks", json!([limit])).await
  }
}

#[async_trait]
impl JsonRpcClient for AgtClient {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }
}
