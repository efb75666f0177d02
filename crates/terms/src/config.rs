//! Node configuration, as stored in the tree's node attributes.

use idm::IdmCredentials;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::ConfigError;

pub const DEFAULT_ADMIN_USER: &str = "openidm-admin";

/// What to do when IDM does not confirm an acceptance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceFailurePolicy {
    /// Route to `ACCEPTED` anyway and log the failure.
    #[default]
    Ignore,
    /// Abort the ceremony with a node error.
    Fail,
}

/// Static configuration, immutable for the lifetime of the node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsConfig {
    /// IDM base URL, e.g. `https://idm.example.com/openidm`.
    pub idm_base_url: String,
    #[serde(default = "default_admin_user")]
    pub idm_admin_user: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub idm_admin_password: SecretString,
    #[serde(default)]
    pub on_submit_failure: AcceptanceFailurePolicy,
}

fn default_admin_user() -> String {
    DEFAULT_ADMIN_USER.to_owned()
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl TermsConfig {
    /// Decode and validate the node's attribute JSON.
    ///
    /// # Errors
    /// - [`ConfigError::Invalid`] if a required attribute is missing or
    ///   mistyped.
    /// - [`ConfigError::Blank`] if a required attribute is empty.
    pub fn from_attributes(attributes: &Value) -> Result<Self, ConfigError> {
        let config = TermsConfig::deserialize(attributes)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.idm_base_url.trim().is_empty() {
            return Err(ConfigError::Blank("idmBaseUrl"));
        }
        if self.idm_admin_user.trim().is_empty() {
            return Err(ConfigError::Blank("idmAdminUser"));
        }
        if self.idm_admin_password.expose_secret().is_empty() {
            return Err(ConfigError::Blank("idmAdminPassword"));
        }
        Ok(())
    }
}

impl From<&TermsConfig> for IdmCredentials {
    fn from(config: &TermsConfig) -> Self {
        IdmCredentials {
            base_url: config.idm_base_url.clone(),
            admin_user: config.idm_admin_user.clone(),
            admin_password: config.idm_admin_password.clone(),
        }
    }
}
