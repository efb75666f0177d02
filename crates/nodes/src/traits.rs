//! The `AuthNode` trait — the contract every tree node must fulfil.

use serde_json::Value;

use crate::{Action, Callback, ConfirmationCallback, NodeError};

/// Shared-state key holding the user being authenticated.
pub const USERNAME: &str = "username";

/// Per-invocation context passed to a node by the engine.
///
/// The state maps are owned by the engine; a node that does not change
/// them hands them back as-is in [`Action::Goto`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeContext {
    /// State that lives for the whole login ceremony.
    pub shared_state: Value,
    /// State the engine clears more aggressively (e.g. credentials).
    pub transient_state: Value,
    /// Callbacks answered by the client on this round trip, if any.
    pub callbacks: Vec<Callback>,
}

impl TreeContext {
    pub fn new(shared_state: Value, transient_state: Value) -> Self {
        Self {
            shared_state,
            transient_state,
            callbacks: Vec::new(),
        }
    }

    /// Attach the callbacks the client answered.
    pub fn with_callbacks(mut self, callbacks: Vec<Callback>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// First confirmation callback delivered with this round trip.
    pub fn confirmation(&self) -> Option<&ConfirmationCallback> {
        self.callbacks.iter().find_map(|cb| match cb {
            Callback::Confirmation(c) => Some(c),
            _ => None,
        })
    }

    /// The `username` entry of shared state, when it is a string.
    pub fn username(&self) -> Option<&str> {
        self.shared_state.get(USERNAME).and_then(Value::as_str)
    }
}

/// The core node trait.
///
/// Called synchronously by the engine, once per round trip.
pub trait AuthNode: Send + Sync {
    /// Process one step of the ceremony.
    fn evaluate(&self, context: TreeContext) -> Result<Action, NodeError>;
}
