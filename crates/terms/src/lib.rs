//! `terms` crate — the terms-and-conditions authentication node.
//!
//! [`TermsAndConditionsNode`] asks IDM whether the user has terms to accept,
//! shows them with an accept/cancel confirmation, and reports the user's
//! answer back to IDM on the following round trip.

pub mod config;
pub mod error;
pub mod node;
pub mod outcome;
pub mod script;

pub use config::{AcceptanceFailurePolicy, TermsConfig};
pub use error::{ConfigError, TermsError};
pub use node::TermsAndConditionsNode;
pub use outcome::{TermsOutcome, TermsOutcomeProvider};
pub use script::client_side_script_executor;
