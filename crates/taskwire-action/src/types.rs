//! Core types and value objects for action records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ActionError;

/// The closed set of action kinds, keyed on the wire by the `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Open a file in the editor surface of the runtime.
    #[serde(rename = "vscode_open_file")]
    VsCodeOpenFile,
}

impl ActionKind {
    pub const ALL: [ActionKind; 1] = [ActionKind::VsCodeOpenFile];

    /// Wire name of the kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ActionKind::VsCodeOpenFile => "vscode_open_file",
        }
    }

    /// Header label used when rendering an action of this kind.
    pub const fn label(&self) -> &'static str {
        match self {
            ActionKind::VsCodeOpenFile => "VSCodeOpenFileAction",
        }
    }

    /// Whether a runner may execute actions of this kind. Fixed per kind.
    pub const fn is_runnable(&self) -> bool {
        match self {
            ActionKind::VsCodeOpenFile => true,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = ActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ActionError::UnknownKind(s.to_string()))
    }
}

/// Result returned by action handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerOutcome {
    pub success: bool,
    pub message: String,
    pub output: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================
