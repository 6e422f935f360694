//! Authenticated Slack Web API client.
//!
//! Every request built through [`ApiClient`] carries the bearer token, a fixed
//! `User-Agent` and a per-request timeout.

use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

/// Slack Web API base URL.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api/";

/// Per-request timeout applied unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT_VALUE: &str = concat!("blockkit/", env!("CARGO_PKG_VERSION"));

/// Slack Web API methods used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `chat.postMessage`
    ChatPostMessage,
}

impl Endpoint {
    /// Method name, relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::ChatPostMessage => "chat.postMessage",
        }
    }
}

/// Slack API client that injects authentication on every request.
///
/// The underlying [`reqwest::Client`] is either created here or supplied by
/// the caller; cloning an `ApiClient` shares its connection pool, which is
/// released when the last clone is dropped.
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client.
    http: Client,
    /// Bot token (`xoxb-...`).
    auth_token: SecretString,
    /// Base URL, always ending in `/`.
    base_url: String,
    /// Timeout applied to each request.
    timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("auth_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with its own connection pool.
    #[must_use]
    pub fn new(auth_token: SecretString) -> Self {
        Self::with_http_client(auth_token, Client::new())
    }

    /// Create a client on top of an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_http_client(auth_token: SecretString, http: Client) -> Self {
        Self {
            http,
            auth_token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another API root, e.g. a mock server.
    ///
    /// A trailing `/` is added if missing so endpoint paths join under it.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(base_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url.into();
        Ok(self)
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API root requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL of an API method.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be joined with the method path.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(endpoint.path())
    }

    /// Start a `POST` to an API method with authentication, user agent and
    /// timeout already applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built.
    pub fn post(&self, endpoint: Endpoint) -> Result<RequestBuilder, url::ParseError> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self
            .http
            .post(url)
            .bearer_auth(self.auth_token.expose_secret())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .timeout(self.timeout))
    }
}
