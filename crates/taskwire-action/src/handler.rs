//! Action handler registry and trait definition.
//!
//! Defines the `ActionHandler` async trait and the kind-keyed registry a
//! dispatcher uses to route actions to the correct implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::action::{Action, AnyAction};
use crate::error::ActionError;
use crate::types::{ActionKind, HandlerOutcome};

/// Executes actions of one kind. Implementations live with the runtime.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// The kind this handler accepts.
    fn action_kind(&self) -> ActionKind;

    async fn execute(&self, action: &AnyAction) -> Result<HandlerOutcome, ActionError>;

    /// Human-readable description shown before execution.
    fn describe(&self, action: &AnyAction) -> String {
        action.message()
    }
}

/// Lookup table from action kind to handler.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<ActionKind, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own kind.
    ///
    /// Returns the handler previously registered for that kind, if any.
    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) -> Option<Arc<dyn ActionHandler>> {
        let kind = handler.action_kind();
        let previous = self.handlers.insert(kind, handler);
        if previous.is_some() {
            tracing::warn!(kind = %kind, "Replaced existing action handler");
        } else {
            tracing::debug!(kind = %kind, "Registered action handler");
        }
        previous
    }

    pub fn get(&self, kind: ActionKind) -> Option<Arc<dyn ActionHandler>> {
        self.handlers.get(&kind).cloned()
    }

    /// Find the handler for an action.
    ///
    /// Non-runnable kinds are refused before the table is consulted.
    pub fn route(&self, action: &AnyAction) -> Result<Arc<dyn ActionHandler>, ActionError> {
        let kind = action.kind();
        if !action.runnable() {
            return Err(ActionError::NotRunnable(kind));
        }
        let handler = self
            .get(kind)
            .ok_or(ActionError::UnregisteredHandler(kind))?;
        tracing::debug!(kind = %kind, "Routed action");
        Ok(handler)
    }

    pub fn kinds(&self) -> Vec<ActionKind> {
        self.handlers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
