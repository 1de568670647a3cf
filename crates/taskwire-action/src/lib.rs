//! Action records for Taskwire.
//!
//! Defines the closed set of action kinds, the typed record for each kind,
//! their wire format, and the kind-keyed handler registry that dispatchers
//! plug into.

pub mod action;
pub mod error;
pub mod handler;
pub mod types;
pub mod vscode;

pub use action::{Action, AnyAction};
pub use error::ActionError;
pub use handler::{ActionHandler, ActionRegistry};
pub use taskwire_core::SecurityRisk;
pub use types::{ActionKind, HandlerOutcome};
pub use vscode::{VsCodeOpenFileAction, VsCodeOpenFileActionBuilder};
