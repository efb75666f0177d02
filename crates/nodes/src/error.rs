//! Node-level error type.

use thiserror::Error;

/// Errors returned by a node's `evaluate` method.
///
/// Returning an error aborts the login ceremony; the engine does not route
/// it to any outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// A key the node depends on is absent from shared state.
    #[error("shared state is missing '{key}'")]
    MissingState { key: &'static str },

    /// Permanent failure while processing the step.
    #[error("fatal node error: {0}")]
    Fatal(String),
}
