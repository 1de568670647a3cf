//! Error types for action records and handlers.

use crate::types::ActionKind;
use taskwire_core::error::TaskwireError;

/// Errors from action construction, decoding and handler routing.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("Action kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: ActionKind, found: String },
    #[error("Unknown action kind: {0}")]
    UnknownKind(String),
    #[error("Action kind is not runnable: {0}")]
    NotRunnable(ActionKind),
    #[error("Action kind not registered: {0}")]
    UnregisteredHandler(ActionKind),
    #[error("Action handler failed: {0}")]
    HandlerFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Core(#[from] TaskwireError),
}

impl From<serde_json::Error> for ActionError {
    fn from(err: serde_json::Error) -> Self {
        ActionError::Serialization(err.to_string())
    }
}
