//! End-to-end runs of the node across the engine's round trips.
//!
//! The engine itself is external, so each test plays its part by hand:
//! relay the prompt, fill in the user's answer, and re-invoke the node.

use std::sync::Once;

use idm::mock::{Call, MockTermsService};
use idm::{Requirements, UiConfig};
use nodes::{Action, AuthNode, Callback, OutcomeProvider, PreferredLocales, TreeContext};
use serde_json::json;
use terms::{AcceptanceFailurePolicy, TermsAndConditionsNode, TermsOutcomeProvider};
use uuid::Uuid;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn pending() -> Requirements {
    Requirements {
        terms: Some("&lt;p&gt;Be nice.&lt;/p&gt;".into()),
        ui_config: Some(UiConfig {
            display_name: Some("Terms & Conditions".into()),
            purpose: Some("Please accept to continue.".into()),
            button_text: Some("I agree".into()),
        }),
    }
}

/// Answer the prompt's confirmation with `index`, as the client would.
fn answer(prompt: &Action, index: usize) -> Vec<Callback> {
    prompt
        .callbacks()
        .expect("prompt expected")
        .iter()
        .cloned()
        .map(|cb| match cb {
            Callback::Confirmation(c) => Callback::Confirmation(c.with_selected_index(index)),
            other => other,
        })
        .collect()
}

fn run(node: &dyn AuthNode, index: usize) -> Action {
    let shared = json!({ "username": "bjensen" });
    let transient = json!({});

    let prompt = node
        .evaluate(TreeContext::new(shared.clone(), transient.clone()))
        .unwrap();

    let ctx = TreeContext::new(shared, transient).with_callbacks(answer(&prompt, index));
    node.evaluate(ctx).unwrap()
}

#[test]
fn accepting_user_reaches_accepted() {
    init_tracing();
    let service = MockTermsService::with_requirements(pending());
    let node = TermsAndConditionsNode::new(Uuid::nil(), service.clone(), AcceptanceFailurePolicy::Ignore);

    let action = run(&node, 0);

    assert_eq!(action.outcome(), Some("ACCEPTED"));
    assert_eq!(
        service.calls(),
        vec![Call::Fetch("bjensen".into()), Call::Submit("bjensen".into())]
    );
}

#[test]
fn declining_user_reaches_canceled() {
    init_tracing();
    let service = MockTermsService::with_requirements(pending());
    let node = TermsAndConditionsNode::new(Uuid::nil(), service.clone(), AcceptanceFailurePolicy::Ignore);

    let action = run(&node, 1);

    assert_eq!(action.outcome(), Some("CANCELED"));
    assert_eq!(service.calls(), vec![Call::Fetch("bjensen".into())]);
}

#[test]
fn unreachable_idm_lets_the_user_through() {
    init_tracing();
    // Bind then drop to obtain a port with no listener.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let node = TermsAndConditionsNode::from_attributes(
        Uuid::nil(),
        &json!({
            "idmBaseUrl": format!("http://{addr}/openidm"),
            "idmAdminPassword": "s3cret"
        }),
    )
    .unwrap();

    let action = node
        .evaluate(TreeContext::new(json!({ "username": "bjensen" }), json!({})))
        .unwrap();

    assert_eq!(
        action,
        Action::goto("CONTINUE", json!({ "username": "bjensen" }), json!({}))
    );
}

#[test]
fn malformed_base_url_lets_the_user_through() {
    init_tracing();
    let node = TermsAndConditionsNode::from_attributes(
        Uuid::nil(),
        &json!({ "idmBaseUrl": "idm.example.com", "idmAdminPassword": "s3cret" }),
    )
    .unwrap();

    let action = node
        .evaluate(TreeContext::new(json!({ "username": "bjensen" }), json!({})))
        .unwrap();

    assert_eq!(action.outcome(), Some("CONTINUE"));
}

#[test]
fn bad_attributes_fail_at_setup() {
    let result = TermsAndConditionsNode::from_attributes(Uuid::nil(), &json!({ "idmBaseUrl": "x" }));
    assert!(matches!(result, Err(terms::TermsError::Config(_))));
}

#[test]
fn designer_sees_three_outcomes() {
    let ids: Vec<String> = TermsOutcomeProvider
        .outcomes(&PreferredLocales::new(["en-GB"]))
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(ids, vec!["CONTINUE", "ACCEPTED", "CANCELED"]);
}
