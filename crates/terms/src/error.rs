//! Setup-time error types.
//!
//! Runtime problems never surface here; see [`crate::TermsAndConditionsNode`].

use thiserror::Error;

/// The node's attributes could not be turned into a [`crate::TermsConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid node attributes: {0}")]
    Invalid(#[from] serde_json::Error),

    /// A required attribute is present but blank.
    #[error("attribute '{0}' must not be blank")]
    Blank(&'static str),
}

/// Errors building a node.
#[derive(Debug, Error)]
pub enum TermsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot create IDM client: {0}")]
    Idm(#[from] idm::IdmError),
}
