/**
* filename : rpc
* date: 2026. 10. 19.
* description: JSON-RPC 2.0 plumbing shared by wallet service clients.
**/

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::AppError;

/// Error code the wallet service returns for an unparseable key or mnemonic.
pub const INVALID_KEY_CODE: i64 = -32010;

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
  pub result: Option<T>,
  pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
  pub code: i64,
  pub message: String,
}

impl From<RpcError> for AppError {
  fn from(err: RpcError) -> Self {
    if err.code == INVALID_KEY_CODE {
      AppError::InvalidKey
    } else {
      AppError::Service(format!("{} (code {})", err.message, err.code))
    }
  }
}

/// Turns a raw JSON-RPC envelope into the method's result.
///
/// A `null` or missing result is handed to `T` as JSON `null`, so unit and
/// `Option` results decode while anything else reports a client error.
pub fn decode_response<T>(body: Value) -> Result<T, AppError>
where
  T: DeserializeOwned,
{
  let response: RpcResponse<Value> = serde_json::from_value(body)?;

  if let Some(error) = response.error {
    return Err(error.into());
  }

  let result = response.result.unwrap_or(Value::Null);
  Ok(serde_json::from_value(result)?)
}

#[async_trait]
pub trait JsonRpcClient: Clone + Send + Sync {
  fn get_http_client(&self) -> &Client;
  fn get_api_url(&self) -> &str;

  async fn call<T>(&self, method: &str, params: Value) -> Result<T, AppError>
  where
    T: DeserializeOwned + Send,
  {
    let payload = json!({
      "jsonrpc": "2.0",
      "id": 1,
      "method": method,
      "params": params,
    });

    let body = self
      .get_http_client()
      .post(self.get_api_url())
      .header("Content-Type", "application/json")
      .json(&payload)
      .send()
      .await?
      .error_for_status()?
      .json::<Value>()
      .await?;

    decode_response(body)
  }
}
