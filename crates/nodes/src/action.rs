//! What a node tells the engine to do next.

use serde_json::Value;

use crate::Callback;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Transition to the node wired to `outcome`, carrying state forward.
    Goto {
        outcome: String,
        shared_state: Value,
        transient_state: Value,
    },
    /// Relay `callbacks` to the user and re-invoke the node with the answers.
    Send { callbacks: Vec<Callback> },
}

impl Action {
    pub fn goto(outcome: impl Into<String>, shared_state: Value, transient_state: Value) -> Self {
        Action::Goto {
            outcome: outcome.into(),
            shared_state,
            transient_state,
        }
    }

    pub fn send(callbacks: Vec<Callback>) -> Self {
        Action::Send { callbacks }
    }

    /// The outcome identifier, if this action is a transition.
    pub fn outcome(&self) -> Option<&str> {
        match self {
            Action::Goto { outcome, .. } => Some(outcome),
            Action::Send { .. } => None,
        }
    }

    /// The callbacks to relay, if this action is a prompt.
    pub fn callbacks(&self) -> Option<&[Callback]> {
        match self {
            Action::Goto { .. } => None,
            Action::Send { callbacks } => Some(callbacks),
        }
    }
}
