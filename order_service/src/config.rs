// order_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// How catalog stock is written back once the order is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockUpdateMode {
  /// Subtract from the quantities read during validation and overwrite the catalog
  /// with the result. Concurrent orders on the same product can lose updates.
  #[default]
  Overwrite,
  /// Hand the ordered quantities to the catalog, which subtracts them itself.
  Decrement,
}

impl FromStr for StockUpdateMode {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "overwrite" => Ok(StockUpdateMode::Overwrite),
      "decrement" => Ok(StockUpdateMode::Decrement),
      other => Err(AppError::Config(format!(
        "Invalid ORDERFLOW_STOCK_UPDATE_MODE '{}': expected 'overwrite' or 'decrement'",
        other
      ))),
    }
  }
}

/// Settings read by `OrderCreationWorkflow`.
#[derive(Debug, Clone, Default)]
pub struct WorkflowConfig {
  pub stock_update_mode: StockUpdateMode,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub workflow: WorkflowConfig,
  // Only used by the demo binary.
  pub seed_path: Option<PathBuf>,
  pub request_path: Option<PathBuf>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let stock_update_mode = match get_env("ORDERFLOW_STOCK_UPDATE_MODE") {
      Some(raw) => raw.parse::<StockUpdateMode>()?,
      None => StockUpdateMode::default(),
    };
    let seed_path = get_env("ORDERFLOW_SEED_PATH").map(PathBuf::from);
    let request_path = get_env("ORDERFLOW_REQUEST_PATH").map(PathBuf::from);

    tracing::info!(?stock_update_mode, "Application configuration loaded successfully.");

    Ok(Self {
      workflow: WorkflowConfig { stock_update_mode },
      seed_path,
      request_path,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_stock_update_modes() {
    assert_eq!("overwrite".parse::<StockUpdateMode>().unwrap(), StockUpdateMode::Overwrite);
    assert_eq!(" Decrement ".parse::<StockUpdateMode>().unwrap(), StockUpdateMode::Decrement);
    assert!(matches!(
      "reserve".parse::<StockUpdateMode>(),
      Err(AppError::Config(msg)) if msg.contains("reserve")
    ));
  }

  #[test]
  fn default_mode_preserves_overwrite_behavior() {
    assert_eq!(WorkflowConfig::default().stock_update_mode, StockUpdateMode::Overwrite);
  }
}
