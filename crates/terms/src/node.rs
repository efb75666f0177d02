//! `TermsAndConditionsNode` — asks the user to accept pending IDM terms.
//!
//! The node runs over two round trips of the ceremony:
//! 1. No confirmation answer yet: fetch requirements from IDM. With terms
//!    pending, send the prompt; otherwise leave through `CONTINUE`.
//! 2. Confirmation answered: the first button accepts (recorded in IDM,
//!    leaves through `ACCEPTED`), anything else leaves through `CANCELED`.
//!
//! Continuity between the two calls lives entirely in the engine's
//! callbacks; the node keeps no per-ceremony state.

use idm::{HttpTermsService, IdmCredentials, PendingTerms, TermsService};
use nodes::traits::USERNAME;
use nodes::{Action, AuthNode, Callback, ConfirmationCallback, MessageType, NodeError, TreeContext};
use serde_json::Value;
use tracing::{debug, error, info, info_span, warn, Span};
use uuid::Uuid;

use crate::script::{client_side_script_executor, TERMS_DISPLAY_SCRIPT};
use crate::{AcceptanceFailurePolicy, TermsConfig, TermsError, TermsOutcome};

/// Form element the display script binds to.
pub const TERMS_OUTPUT_ID: &str = "TermsAndConditions";
pub const CANCEL_LABEL: &str = "Cancel";
/// Confirmation option that means "accept".
pub const ACCEPT_INDEX: usize = 0;

pub struct TermsAndConditionsNode<S = HttpTermsService> {
    node_id: Uuid,
    service: S,
    on_submit_failure: AcceptanceFailurePolicy,
    span: Span,
}

impl TermsAndConditionsNode<HttpTermsService> {
    /// Build a node talking to the IDM described by `config`.
    pub fn from_config(node_id: Uuid, config: &TermsConfig) -> Result<Self, TermsError> {
        let service = HttpTermsService::new(IdmCredentials::from(config))?;
        Ok(Self::new(node_id, service, config.on_submit_failure))
    }

    /// Build a node straight from its stored attribute JSON.
    pub fn from_attributes(node_id: Uuid, attributes: &Value) -> Result<Self, TermsError> {
        let config = TermsConfig::from_attributes(attributes)?;
        Self::from_config(node_id, &config)
    }
}

impl<S: TermsService> TermsAndConditionsNode<S> {
    pub fn new(node_id: Uuid, service: S, on_submit_failure: AcceptanceFailurePolicy) -> Self {
        Self {
            node_id,
            service,
            on_submit_failure,
            span: info_span!("terms_and_conditions", node_id = %node_id),
        }
    }

    /// Log under `span` instead of the node's own span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn node_id(&self) -> Uuid {
        self.node_id
    }

    fn finish(outcome: TermsOutcome, context: TreeContext) -> Action {
        Action::goto(outcome.id(), context.shared_state, context.transient_state)
    }

    fn username(context: &TreeContext) -> Result<String, NodeError> {
        context
            .username()
            .map(str::to_owned)
            .ok_or(NodeError::MissingState { key: USERNAME })
    }

    fn answer(&self, selected_index: Option<usize>, context: TreeContext) -> Result<Action, NodeError> {
        if selected_index != Some(ACCEPT_INDEX) {
            info!(?selected_index, "terms canceled");
            return Ok(Self::finish(TermsOutcome::Canceled, context));
        }

        let username = Self::username(&context)?;
        info!("terms accepted");

        if !self.service.submit_acceptance(&username) {
            match self.on_submit_failure {
                AcceptanceFailurePolicy::Ignore => {
                    warn!("IDM did not record the acceptance; continuing as accepted");
                }
                AcceptanceFailurePolicy::Fail => {
                    error!("IDM did not record the acceptance");
                    return Err(NodeError::Fatal(format!(
                        "terms acceptance for '{username}' was not recorded"
                    )));
                }
            }
        }

        Ok(Self::finish(TermsOutcome::Accepted, context))
    }

    fn prompt(pending: PendingTerms) -> Action {
        let script = client_side_script_executor(TERMS_DISPLAY_SCRIPT, &pending.terms, TERMS_OUTPUT_ID);

        Action::send(vec![
            Callback::script(script),
            Callback::info(pending.display_name),
            Callback::info(pending.purpose),
            Callback::info(pending.terms),
            Callback::Confirmation(ConfirmationCallback::new(
                MessageType::Information,
                vec![pending.button_text, CANCEL_LABEL.to_owned()],
                ACCEPT_INDEX,
            )),
        ])
    }
}

impl<S: TermsService> AuthNode for TermsAndConditionsNode<S> {
    fn evaluate(&self, context: TreeContext) -> Result<Action, NodeError> {
        let _entered = self.span.enter();

        if let Some(selected_index) = context.confirmation().map(|c| c.selected_index) {
            return self.answer(selected_index, context);
        }

        let username = Self::username(&context)?;
        let requirements = match self.service.fetch_requirements(&username) {
            Some(requirements) if requirements.has_terms() => requirements,
            _ => {
                info!("no terms to accept");
                return Ok(Self::finish(TermsOutcome::Continue, context));
            }
        };

        debug!(?requirements, "terms acceptance required");

        match requirements.pending_terms() {
            Ok(pending) => Ok(Self::prompt(pending)),
            Err(e) => {
                warn!(error = %e, "ignoring incomplete terms document");
                Ok(Self::finish(TermsOutcome::Continue, context))
            }
        }
    }
}
