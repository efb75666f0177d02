//! Typed error type for the idm crate.

use thiserror::Error;

/// Failures of a single IDM round trip.
///
/// These never cross the [`crate::TermsService`] boundary; they are logged
/// and collapsed there.
#[derive(Debug, Error)]
pub enum IdmError {
    #[error("invalid IDM base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response carries no requirements")]
    MissingRequirements,
}
