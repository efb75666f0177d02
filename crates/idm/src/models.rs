//! Typed view of the self-service terms response.
//!
//! Every field is optional at decode time. Presence is checked afterwards by
//! [`Requirements::pending_terms`], so a partial document still decodes and
//! the caller decides what "incomplete" means.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level body of `GET /selfservice/termsAndConditions`.
#[derive(Debug, Deserialize)]
pub(crate) struct RequirementsEnvelope {
    #[serde(default)]
    pub requirements: Option<Requirements>,
}

/// The outstanding user action described by IDM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(rename = "uiConfig", default)]
    pub ui_config: Option<UiConfig>,
}

/// Presentation text accompanying the terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
}

/// Terms that are ready to be shown: every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTerms {
    pub terms: String,
    pub display_name: String,
    pub purpose: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementsError {
    #[error("no terms pending")]
    NoTerms,

    #[error("terms document is missing '{0}'")]
    MissingField(&'static str),
}

impl Requirements {
    /// Whether IDM asks for terms to be accepted at all.
    pub fn has_terms(&self) -> bool {
        self.terms.is_some()
    }

    /// Extract the terms and all of their UI text.
    pub fn pending_terms(self) -> Result<PendingTerms, RequirementsError> {
        let terms = self.terms.ok_or(RequirementsError::NoTerms)?;
        let ui = self
            .ui_config
            .ok_or(RequirementsError::MissingField("uiConfig"))?;

        Ok(PendingTerms {
            terms,
            display_name: ui
                .display_name
                .ok_or(RequirementsError::MissingField("uiConfig.displayName"))?,
            purpose: ui
                .purpose
                .ok_or(RequirementsError::MissingField("uiConfig.purpose"))?,
            button_text: ui
                .button_text
                .ok_or(RequirementsError::MissingField("uiConfig.buttonText"))?,
        })
    }
}

/// Body of the `submitRequirements` action.
#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequestBody<'a> {
    pub input: SubmitInput<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitInput<'a> {
    pub accept: &'a str,
}

impl SubmitRequestBody<'static> {
    pub fn accept() -> Self {
        SubmitRequestBody {
            input: SubmitInput { accept: "true" },
        }
    }
}
