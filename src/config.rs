use serde::Deserialize;
use std::num::NonZeroUsize;

use crate::types::AppError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
  #[serde(default)]
  pub service: ServiceSettings,
  #[serde(default)]
  pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceSettings {
  #[serde(default)]
  pub memory_service: bool,
  #[serde(default = "default_api_url")]
  pub api_url: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
  #[serde(default = "default_page_size")]
  pub page_size: usize,
  #[serde(default = "default_refresh_interval_secs")]
  pub refresh_interval_secs: u64,
  #[serde(default = "default_recent_blocks")]
  pub recent_blocks: usize,
  // Imported once at startup when no wallet is active
  #[serde(default)]
  pub import_key: Option<String>,
}

fn default_api_url() -> String {
  "http://127.0.0.1:3001/rpc".to_string()
}

fn default_timeout_secs() -> u64 {
  10
}

fn default_page_size() -> usize {
  6
}

fn default_refresh_interval_secs() -> u64 {
  15
}

fn default_recent_blocks() -> usize {
  50
}

impl Default for ServiceSettings {
  fn default() -> Self {
    Self {
      memory_service: false,
      api_url: default_api_url(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

impl Default for DashboardSettings {
  fn default() -> Self {
    Self {
      page_size: default_page_size(),
      refresh_interval_secs: default_refresh_interval_secs(),
      recent_blocks: default_recent_blocks(),
      import_key: None,
    }
  }
}

impl DashboardSettings {
  pub fn page_size(&self) -> Result<NonZeroUsize, AppError> {
    NonZeroUsize::new(self.page_size)
      .ok_or_else(|| AppError::Config("dashboard.page_size must be at least 1".to_string()))
  }
}

impl Settings {
  pub fn new() -> Result<Self, AppError> {
    Self::load("./config.toml")
  }

  /// Reads `path` (optional) and overlays `APP_` environment variables,
  /// e.g. `APP_SERVICE__API_URL=http://...` overrides `service.api_url`.
  pub fn load(path: &str) -> Result<Self, AppError> {
    let env_prefix = "APP";

    let builder = config::Config::builder()
      .add_source(config::File::with_name(path).required(false))
      .add_source(config::Environment::with_prefix(env_prefix).separator("__"));

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
  }

  fn validate(&self) -> Result<(), AppError> {
    self.dashboard.page_size()?;
    if self.dashboard.refresh_interval_secs == 0 {
      return Err(AppError::Config("dashboard.refresh_interval_secs must be at least 1".to_string()));
    }
    if !self.service.memory_service && self.service.api_url.trim().is_empty() {
      return Err(AppError::Config("service.api_url is required for the remote service".to_string()));
    }
    Ok(())
  }
}
