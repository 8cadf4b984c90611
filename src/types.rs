/**
* filename : types
* date: 2026. 10. 19.
* description: Shared error type and notification channel aliases.
**/

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

// ====== User-visible notifications ======
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
  Info(String),
  Error(String),
}

// ====== Channel aliases ======
pub type NotificationSender = UnboundedSender<Notification>;
pub type NotificationReceiver = UnboundedReceiver<Notification>;

// ====== Unified Error Type ======
#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("API Client error: {0}")]
  Client(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Invalid private key or mnemonic")]
  InvalidKey,

  #[error("Wallet import error: {0}")]
  Import(String),

  #[error("Wallet service error: {0}")]
  Service(String),

  #[error("No active wallet")]
  NoWallet,
}

// ====== Error Conversions (From impls) ======

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
    AppError::Client(format!("Reqwest error: {}", err))
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
    AppError::Client(format!("JSON parse error: {}", err))
  }
}

impl From<config::ConfigError> for AppError {
  fn from(err: config::ConfigError) -> Self {
    AppError::Config(err.to_string())
  }
}
