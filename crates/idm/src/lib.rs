//! `idm` crate — client for the identity-management self-service terms
//! endpoint.
//!
//! [`TermsService`] is the seam nodes depend on. [`HttpTermsService`] talks
//! to a real IDM over blocking HTTP; [`mock::MockTermsService`] stands in for
//! it in tests. Both operations swallow every remote failure: a failed fetch
//! is "nothing pending" and a failed submit is `false`.

pub mod error;
pub mod http;
pub mod mock;
pub mod models;
pub mod service;

pub use error::IdmError;
pub use http::{HttpTermsService, IdmCredentials};
pub use models::{PendingTerms, Requirements, RequirementsError, UiConfig};
pub use service::TermsService;
