//! `OpenAI` API client and builder.
//!
//! The [`Client`] holds the bearer credential and the base endpoint URL
//! and exposes one typed method per API operation. All methods issue a
//! single blocking-until-done request with a fixed 60-second timeout;
//! callers wanting concurrency issue calls from their own tasks.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default `OpenAI` API base URL.
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Per-request timeout applied to every call, in seconds.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the `OpenAI` REST API.
///
/// Cheap to clone; the credential and base URL are shared and read-only
/// after construction.
///
/// # Example
///
/// ```rust,ignore
/// use kotori::Client;
///
/// let client = Client::new("sk-...")?;
///
/// // Compatible endpoints and proxies:
/// let client = Client::builder()
///     .api_key("sk-...")
///     .base_url("https://my-openai-proxy.com/v1")
///     .build()?;
/// ```
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client with the given API key and the default base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the key is empty or
    /// whitespace-only.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl ClientBuilder {
    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL.
    ///
    /// Useful for proxies and `OpenAI`-compatible endpoints. A trailing
    /// slash is trimmed so endpoint paths join cleanly.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the API key is missing or
    /// empty, or if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let api_key = self.api_key.unwrap_or_default();
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::configuration("an OpenAI API key is required"));
        }

        let base_url = self
            .base_url
            .map_or_else(|| OPENAI_API_BASE_URL.to_owned(), |url| {
                url.trim_end_matches('/').to_owned()
            });

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| Error::configuration(format!("failed to build HTTP client: {err}")))?;

        Ok(Client {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}
