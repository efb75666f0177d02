//! The `TermsService` trait — what a node needs from IDM.

use crate::Requirements;

/// Remote terms-and-conditions operations, run as `username`.
///
/// Neither method fails: implementations log the problem and report
/// "nothing pending" or "not recorded".
pub trait TermsService: Send + Sync {
    /// Outstanding requirements for `username`, or `None` when there are none
    /// or they could not be retrieved.
    fn fetch_requirements(&self, username: &str) -> Option<Requirements>;

    /// Record that `username` accepted the terms. `true` iff IDM confirmed.
    fn submit_acceptance(&self, username: &str) -> bool;
}
