//! Blocking HTTP implementation of [`TermsService`].

use reqwest::blocking::{Client, Request, RequestBuilder};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::models::{RequirementsEnvelope, SubmitRequestBody};
use crate::{IdmError, Requirements, TermsService};

/// Path of the self-service terms endpoint, relative to the IDM base URL.
pub const TERMS_ENDPOINT: &str = "selfservice/termsAndConditions";
pub const USER_AGENT_VALUE: &str = "TermsAndConditions Authentication Node";

pub const HEADER_USERNAME: &str = "X-OpenIDM-Username";
pub const HEADER_PASSWORD: &str = "X-OpenIDM-Password";
pub const HEADER_RUN_AS: &str = "X-OpenIDM-RunAs";

/// Administrative identity used to call IDM on behalf of users.
#[derive(Debug, Clone)]
pub struct IdmCredentials {
    /// e.g. `https://idm.example.com/openidm`
    pub base_url: String,
    pub admin_user: String,
    pub admin_password: SecretString,
}

/// Talks to IDM with static admin credentials plus a per-request run-as
/// header.
///
/// No timeout is configured; the client's defaults apply.
pub struct HttpTermsService {
    client: Client,
    credentials: IdmCredentials,
}

impl HttpTermsService {
    /// Create a service with a fresh HTTP client.
    pub fn new(credentials: IdmCredentials) -> Result<Self, IdmError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, credentials))
    }

    pub fn with_client(client: Client, credentials: IdmCredentials) -> Self {
        Self { client, credentials }
    }

    fn build_url(&self, action: Option<&str>) -> Result<Url, IdmError> {
        let base = self.credentials.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{TERMS_ENDPOINT}"))?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(action) = action {
                query.append_pair("_action", action);
            }
            query.append_pair("_prettyPrint", "true");
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url, username: &str) -> Result<RequestBuilder, IdmError> {
        let mut password = HeaderValue::from_str(self.credentials.admin_password.expose_secret())?;
        password.set_sensitive(true);

        Ok(self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("*/*"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(HEADER_USERNAME, HeaderValue::from_str(&self.credentials.admin_user)?)
            .header(HEADER_PASSWORD, password)
            .header(HEADER_RUN_AS, HeaderValue::from_str(username)?)
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE)))
    }

    /// The `GET` that retrieves pending requirements for `username`.
    pub fn fetch_request(&self, username: &str) -> Result<Request, IdmError> {
        let url = self.build_url(None)?;
        Ok(self.request(Method::GET, url, username)?.build()?)
    }

    /// The `POST` that records acceptance for `username`.
    pub fn submit_request(&self, username: &str) -> Result<Request, IdmError> {
        let url = self.build_url(Some("submitRequirements"))?;
        let body = serde_json::to_vec(&SubmitRequestBody::accept())?;
        Ok(self.request(Method::POST, url, username)?.body(body).build()?)
    }

    /// Fetch requirements, surfacing every failure.
    pub fn try_fetch_requirements(&self, username: &str) -> Result<Requirements, IdmError> {
        let req = self.fetch_request(username)?;
        debug!(url = %req.url(), "fetching terms requirements");

        let res = self.client.execute(req)?;
        let status = res.status();
        let body = res.text()?;

        if status != StatusCode::OK {
            return Err(IdmError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!("terms requirements fetched");
        debug!(%body, "terms requirements response");

        let envelope: RequirementsEnvelope = serde_json::from_str(&body)?;
        envelope.requirements.ok_or(IdmError::MissingRequirements)
    }

    /// Submit acceptance, surfacing every failure.
    pub fn try_submit_acceptance(&self, username: &str) -> Result<(), IdmError> {
        let req = self.submit_request(username)?;
        debug!(url = %req.url(), "submitting terms acceptance");

        let res = self.client.execute(req)?;
        let status = res.status();

        if status != StatusCode::OK {
            let body = res.text().unwrap_or_default();
            return Err(IdmError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!("terms acceptance recorded");
        Ok(())
    }
}

impl TermsService for HttpTermsService {
    #[instrument(skip(self))]
    fn fetch_requirements(&self, username: &str) -> Option<Requirements> {
        match self.try_fetch_requirements(username) {
            Ok(requirements) => Some(requirements),
            Err(IdmError::MissingRequirements) => {
                debug!("IDM reports no requirements");
                None
            }
            Err(e) => {
                warn!(error = %e, "could not fetch terms requirements");
                None
            }
        }
    }

    #[instrument(skip(self))]
    fn submit_acceptance(&self, username: &str) -> bool {
        match self.try_submit_acceptance(username) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "could not submit terms acceptance");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> HttpTermsService {
        HttpTermsService::with_client(
            Client::new(),
            IdmCredentials {
                base_url: base_url.into(),
                admin_user: "openidm-admin".into(),
                admin_password: SecretString::from("s3cret"),
            },
        )
    }

    fn header<'a>(req: &'a Request, name: &str) -> &'a str {
        req.headers()
            .get(name)
            .unwrap_or_else(|| panic!("missing header {name}"))
            .to_str()
            .unwrap()
    }

    #[test]
    fn fetch_request_targets_terms_endpoint() {
        let req = service("https://idm.example.com/openidm")
            .fetch_request("bjensen")
            .unwrap();

        assert_eq!(req.method(), &Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://idm.example.com/openidm/selfservice/termsAndConditions?_prettyPrint=true"
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn fetch_request_carries_admin_and_run_as_headers() {
        let req = service("https://idm.example.com/openidm")
            .fetch_request("bjensen")
            .unwrap();

        assert_eq!(header(&req, "accept"), "*/*");
        assert_eq!(header(&req, "content-type"), "application/json");
        assert_eq!(header(&req, HEADER_USERNAME), "openidm-admin");
        assert_eq!(header(&req, HEADER_PASSWORD), "s3cret");
        assert_eq!(header(&req, HEADER_RUN_AS), "bjensen");
        assert_eq!(header(&req, "user-agent"), USER_AGENT_VALUE);
        assert!(req.headers().get(HEADER_PASSWORD).unwrap().is_sensitive());
    }

    #[test]
    fn submit_request_posts_acceptance() {
        let req = service("https://idm.example.com/openidm/")
            .submit_request("bjensen")
            .unwrap();

        assert_eq!(req.method(), &Method::POST);
        assert_eq!(
            req.url().as_str(),
            "https://idm.example.com/openidm/selfservice/termsAndConditions?_action=submitRequirements&_prettyPrint=true"
        );
        assert_eq!(header(&req, HEADER_RUN_AS), "bjensen");

        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"input":{"accept":"true"}}"#);
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let err = service("not a url").fetch_request("bjensen").unwrap_err();
        assert!(matches!(err, IdmError::InvalidBaseUrl(_)));
    }

    #[test]
    fn unencodable_username_is_rejected() {
        let err = service("https://idm.example.com")
            .fetch_request("line\nbreak")
            .unwrap_err();
        assert!(matches!(err, IdmError::InvalidHeader(_)));
    }

    #[test]
    fn malformed_base_url_collapses_to_nothing_pending() {
        let svc = service("::::");
        assert_eq!(svc.fetch_requirements("bjensen"), None);
        assert!(!svc.submit_acceptance("bjensen"));
    }
}
