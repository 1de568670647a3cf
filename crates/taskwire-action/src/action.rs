//! The shared action interface and the tagged union over all kinds.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use taskwire_core::SecurityRisk;

use crate::error::ActionError;
use crate::types::ActionKind;
use crate::vscode::VsCodeOpenFileAction;

/// Interface shared by every action record.
///
/// `Display` produces the rendered text block; `message` is the one-line
/// summary. Both are pure and total.
pub trait Action: fmt::Display + fmt::Debug + Send + Sync {
    /// Variant discriminator used for routing.
    fn kind(&self) -> ActionKind;

    /// Free-text rationale attached by the producer. Empty when absent.
    fn thought(&self) -> &str;

    /// Risk classification for the policy layer. Carried, never interpreted.
    fn security_risk(&self) -> Option<SecurityRisk>;

    /// Short human-readable summary.
    fn message(&self) -> String;

    /// Whether a runner may execute this action. Fixed per kind.
    fn runnable(&self) -> bool {
        self.kind().is_runnable()
    }
}

/// Any action, keyed on the wire by its `action` tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action")]
pub enum AnyAction {
    #[serde(rename = "vscode_open_file")]
    VsCodeOpenFile(VsCodeOpenFileAction),
}

impl AnyAction {
    /// Decode any action from JSON, dispatching on the `action` tag.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ActionError> {
        let kind = match value.get("action") {
            Some(serde_json::Value::String(tag)) => tag.parse::<ActionKind>()?,
            Some(other) => return Err(ActionError::UnknownKind(other.to_string())),
            None => return Err(ActionError::MissingRequiredField("action")),
        };
        let action = match kind {
            ActionKind::VsCodeOpenFile => {
                AnyAction::VsCodeOpenFile(VsCodeOpenFileAction::from_value(value)?)
            }
        };
        tracing::debug!(kind = %kind, "Decoded action");
        Ok(action)
    }

    pub fn to_json(&self) -> Result<String, ActionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ActionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn inner(&self) -> &dyn Action {
        match self {
            AnyAction::VsCodeOpenFile(action) => action,
        }
    }
}

// Each variant already writes its own `action` tag.
impl Serialize for AnyAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnyAction::VsCodeOpenFile(action) => action.serialize(serializer),
        }
    }
}

impl Action for AnyAction {
    fn kind(&self) -> ActionKind {
        self.inner().kind()
    }

    fn thought(&self) -> &str {
        self.inner().thought()
    }

    fn security_risk(&self) -> Option<SecurityRisk> {
        self.inner().security_risk()
    }

    fn message(&self) -> String {
        self.inner().message()
    }
}

impl fmt::Display for AnyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl From<VsCodeOpenFileAction> for AnyAction {
    fn from(action: VsCodeOpenFileAction) -> Self {
        AnyAction::VsCodeOpenFile(action)
    }
}
