//! Error taxonomy shared by the wizard, the metric engine, and the store.

use log::error;
use serde::{Deserialize, Serialize};

/// Errors surfaced to the frontend.
///
/// `Validation` is user-recoverable: the offending screen shows the message
/// and no state changes. `InvalidInput` means a label reached the core that
/// no closed enum recognizes, so either the frontend option lists or a stored
/// row have drifted. `Store` wraps SQLite failures; the in-memory session is
/// kept so the submit can be retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
  #[error("{0}")]
  Validation(String),

  #[error("Invalid input: {0}")]
  InvalidInput(String),

  #[error("Store error: {0}")]
  Store(String),
}

impl AppError {
  pub fn validation(msg: impl Into<String>) -> Self {
    AppError::Validation(msg.into())
  }

  /// Unknown enumerated labels are always rejected and logged.
  pub fn invalid_input(msg: impl Into<String>) -> Self {
    let msg = msg.into();
    error!("Rejected input: {}", msg);
    AppError::InvalidInput(msg)
  }
}

// Convert sqlx::Error to AppError
impl From<sqlx::Error> for AppError {
  fn from(e: sqlx::Error) -> Self {
    AppError::Store(e.to_string())
  }
}
