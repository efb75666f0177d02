//! `MockTermsService` — a test double for `TermsService`.
//!
//! Useful wherever a node must be exercised without a live IDM.

use std::sync::{Arc, Mutex};

use crate::{Requirements, TermsService};

/// A call received by the mock, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Submit(String),
}

/// A mock that records every call it receives and returns
/// programmer-specified results.
///
/// Clones share the call log, so a test can keep one handle and move the
/// other into the node under test.
#[derive(Debug, Clone)]
pub struct MockTermsService {
    /// Returned from every `fetch_requirements`.
    pub requirements: Option<Requirements>,
    /// Returned from every `submit_acceptance`.
    pub submit_succeeds: bool,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl MockTermsService {
    /// A service that reports the given requirements and accepts submits.
    pub fn with_requirements(requirements: Requirements) -> Self {
        Self {
            requirements: Some(requirements),
            submit_succeeds: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A service with nothing pending. An unreachable IDM looks the same.
    pub fn without_requirements() -> Self {
        Self {
            requirements: None,
            submit_succeeds: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every submit report failure.
    pub fn failing_submit(mut self) -> Self {
        self.submit_succeeds = false;
        self
    }

    /// Snapshot of the calls seen so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TermsService for MockTermsService {
    fn fetch_requirements(&self, username: &str) -> Option<Requirements> {
        self.calls.lock().unwrap().push(Call::Fetch(username.to_owned()));
        self.requirements.clone()
    }

    fn submit_acceptance(&self, username: &str) -> bool {
        self.calls.lock().unwrap().push(Call::Submit(username.to_owned()));
        self.submit_succeeds
    }
}
