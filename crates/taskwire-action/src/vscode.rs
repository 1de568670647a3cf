//! Open-a-file-in-the-editor action.

use serde::{Deserialize, Serialize};
use std::fmt;
use taskwire_core::SecurityRisk;

use crate::action::Action;
use crate::error::ActionError;
use crate::types::ActionKind;

/// Opens a file in the editor server running inside the runtime.
///
/// A frozen value: fields are set at construction and only read afterwards.
/// Path normalization and existence checks belong to whoever executes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "VsCodeOpenFileWire", try_from = "VsCodeOpenFileWire")]
pub struct VsCodeOpenFileAction {
    file_path: String,
    thought: String,
    security_risk: Option<SecurityRisk>,
}

impl VsCodeOpenFileAction {
    pub const KIND: ActionKind = ActionKind::VsCodeOpenFile;
    pub const RUNNABLE: bool = Self::KIND.is_runnable();

    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            thought: String::new(),
            security_risk: None,
        }
    }

    pub fn builder() -> VsCodeOpenFileActionBuilder {
        VsCodeOpenFileActionBuilder::default()
    }

    pub fn with_thought(mut self, thought: impl Into<String>) -> Self {
        self.thought = thought.into();
        self
    }

    pub fn with_security_risk(mut self, risk: SecurityRisk) -> Self {
        self.security_risk = Some(risk);
        self
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Decode from the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let wire: VsCodeOpenFileWire = serde_json::from_str(json)?;
        Self::try_from(wire)
    }

    pub(crate) fn from_value(value: serde_json::Value) -> Result<Self, ActionError> {
        let wire: VsCodeOpenFileWire = serde_json::from_value(value)?;
        Self::try_from(wire)
    }
}

impl Action for VsCodeOpenFileAction {
    fn kind(&self) -> ActionKind {
        Self::KIND
    }

    fn thought(&self) -> &str {
        &self.thought
    }

    fn security_risk(&self) -> Option<SecurityRisk> {
        self.security_risk
    }

    fn message(&self) -> String {
        format!("Opening file in VSCode: {}", self.file_path)
    }
}

impl fmt::Display for VsCodeOpenFileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", Self::KIND.label())?;
        if !self.thought.is_empty() {
            writeln!(f, "THOUGHT: {}", self.thought)?;
        }
        write!(f, "FILE_PATH: {}", self.file_path)
    }
}

/// Builder that enforces the required `file_path` at `build()` time.
#[derive(Debug, Clone, Default)]
pub struct VsCodeOpenFileActionBuilder {
    file_path: Option<String>,
    thought: Option<String>,
    security_risk: Option<SecurityRisk>,
}

impl VsCodeOpenFileActionBuilder {
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn thought(mut self, thought: impl Into<String>) -> Self {
        self.thought = Some(thought.into());
        self
    }

    pub fn security_risk(mut self, risk: Option<SecurityRisk>) -> Self {
        self.security_risk = risk;
        self
    }

    pub fn build(self) -> Result<VsCodeOpenFileAction, ActionError> {
        let file_path = self
            .file_path
            .ok_or(ActionError::MissingRequiredField("file_path"))?;
        Ok(VsCodeOpenFileAction {
            file_path,
            thought: self.thought.unwrap_or_default(),
            security_risk: self.security_risk,
        })
    }
}

/// Wire shape. `action` is written on output and checked on input.
#[derive(Serialize, Deserialize)]
struct VsCodeOpenFileWire {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    file_path: Option<String>,
    #[serde(default)]
    thought: Option<String>,
    #[serde(default)]
    security_risk: Option<SecurityRisk>,
}

impl From<VsCodeOpenFileAction> for VsCodeOpenFileWire {
    fn from(action: VsCodeOpenFileAction) -> Self {
        Self {
            action: Some(VsCodeOpenFileAction::KIND.as_str().to_string()),
            file_path: Some(action.file_path),
            thought: Some(action.thought),
            security_risk: action.security_risk,
        }
    }
}

impl TryFrom<VsCodeOpenFileWire> for VsCodeOpenFileAction {
    type Error = ActionError;

    fn try_from(wire: VsCodeOpenFileWire) -> Result<Self, Self::Error> {
        if let Some(found) = wire.action {
            if found != Self::KIND.as_str() {
                return Err(ActionError::KindMismatch {
                    expected: Self::KIND,
                    found,
                });
            }
        }
        let mut builder = VsCodeOpenFileAction::builder().security_risk(wire.security_risk);
        if let Some(file_path) = wire.file_path {
            builder = builder.file_path(file_path);
        }
        if let Some(thought) = wire.thought {
            builder = builder.thought(thought);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- message / Display ----

    #[test]
    fn test_message() {
        let action = VsCodeOpenFileAction::new("/workspace/src/main.rs");
        assert_eq!(
            action.message(),
            "Opening file in VSCode: /workspace/src/main.rs"
        );
    }

    #[test]
    fn test_display_without_thought() {
        let action = VsCodeOpenFileAction::new("README.md");
        assert_eq!(
            action.to_string(),
            "**VSCodeOpenFileAction**\nFILE_PATH: README.md"
        );
    }

    #[test]
    fn test_display_with_thought() {
        let action = VsCodeOpenFileAction::new("README.md").with_thought("check the docs");
        assert_eq!(
            action.to_string(),
            "**VSCodeOpenFileAction**\nTHOUGHT: check the docs\nFILE_PATH: README.md"
        );
    }

    #[test]
    fn test_display_has_no_trailing_newline() {
        let action = VsCodeOpenFileAction::new("a.txt").with_thought("t");
        assert!(!action.to_string().ends_with('\n'));
    }

    #[test]
    fn test_empty_thought_is_omitted() {
        let action = VsCodeOpenFileAction::new("a.txt").with_thought("");
        assert!(!action.to_string().contains("THOUGHT"));
    }

    #[test]
    fn test_paths_are_not_normalized() {
        for path in ["", "../../etc/passwd", "dir with spaces/f.py", "C:\\x\\y.txt"] {
            let action = VsCodeOpenFileAction::new(path);
            assert_eq!(action.file_path(), path);
            assert_eq!(action.message(), format!("Opening file in VSCode: {}", path));
            assert!(action.to_string().ends_with(&format!("FILE_PATH: {}", path)));
        }
    }

    // ---- kind / runnable / risk ----

    #[test]
    fn test_kind_and_runnable_are_fixed() {
        let plain = VsCodeOpenFileAction::new("a");
        let risky = VsCodeOpenFileAction::new("b")
            .with_thought("x")
            .with_security_risk(SecurityRisk::High);
        for action in [plain, risky] {
            assert_eq!(action.kind(), ActionKind::VsCodeOpenFile);
            assert!(action.runnable());
        }
        assert!(VsCodeOpenFileAction::RUNNABLE);
    }

    #[test]
    fn test_security_risk_defaults_to_none() {
        let action = VsCodeOpenFileAction::new("a");
        assert_eq!(action.security_risk(), None);
        assert_eq!(action.thought(), "");
        let action = action.with_security_risk(SecurityRisk::Medium);
        assert_eq!(action.security_risk(), Some(SecurityRisk::Medium));
    }

    // ---- builder ----

    #[test]
    fn test_builder_requires_file_path() {
        let err = VsCodeOpenFileAction::builder()
            .thought("no path given")
            .build()
            .unwrap_err();
        assert!(matches!(err, ActionError::MissingRequiredField("file_path")));
    }

    #[test]
    fn test_builder_matches_new() {
        let built = VsCodeOpenFileAction::builder()
            .file_path("src/lib.rs")
            .thought("look")
            .security_risk(Some(SecurityRisk::Low))
            .build()
            .unwrap();
        let direct = VsCodeOpenFileAction::new("src/lib.rs")
            .with_thought("look")
            .with_security_risk(SecurityRisk::Low);
        assert_eq!(built, direct);
    }

    // ---- wire format ----

    #[test]
    fn test_serialize_writes_action_tag() {
        let action = VsCodeOpenFileAction::new("src/lib.rs").with_thought("look");
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({
                "action": "vscode_open_file",
                "file_path": "src/lib.rs",
                "thought": "look",
                "security_risk": null
            })
        );
        assert!(value.get("runnable").is_none());
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let action = VsCodeOpenFileAction::from_json(r#"{"file_path": "x.py"}"#).unwrap();
        assert_eq!(action, VsCodeOpenFileAction::new("x.py"));
    }

    #[test]
    fn test_deserialize_null_thought() {
        let action =
            VsCodeOpenFileAction::from_json(r#"{"file_path": "x.py", "thought": null}"#).unwrap();
        assert_eq!(action.thought(), "");
    }

    #[test]
    fn test_deserialize_missing_file_path() {
        let err = VsCodeOpenFileAction::from_json(r#"{"thought": "hmm"}"#).unwrap_err();
        assert!(matches!(err, ActionError::MissingRequiredField("file_path")));
    }

    #[test]
    fn test_deserialize_rejects_other_kind() {
        let err = VsCodeOpenFileAction::from_json(r#"{"action": "run", "file_path": "x"}"#)
            .unwrap_err();
        assert!(matches!(err, ActionError::KindMismatch { found, .. } if found == "run"));
    }

    #[test]
    fn test_deserialize_rejects_bad_risk() {
        let err = VsCodeOpenFileAction::from_json(r#"{"file_path": "x", "security_risk": 9}"#)
            .unwrap_err();
        assert!(matches!(err, ActionError::Serialization(_)));
    }

    #[test]
    fn test_serde_round_trip() {
        let cases = [
            VsCodeOpenFileAction::new("a"),
            VsCodeOpenFileAction::new("b").with_thought("because"),
            VsCodeOpenFileAction::new("c").with_security_risk(SecurityRisk::Unknown),
            VsCodeOpenFileAction::new("d")
                .with_thought("t")
                .with_security_risk(SecurityRisk::High),
        ];
        for action in cases {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(VsCodeOpenFileAction::from_json(&json).unwrap(), action);
        }
    }
}
