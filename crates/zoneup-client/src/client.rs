//! Main hosted-zone API client implementation.

use crate::api::*;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use zoneup_core::{Error, Result};

/// Default hosted-zone API base URL
const DEFAULT_BASE_URL: &str = "https://dns.api.zoneup.io/v1";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the hosted-zone DNS API
#[derive(Clone)]
pub struct ZoneupClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_token: String,
    base_url: String,
}

impl ZoneupClient {
    /// Create a new client with the given API token using default settings
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        ZoneupClientBuilder::new(api_token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_token: impl Into<String>) -> ZoneupClientBuilder {
        ZoneupClientBuilder::new(api_token)
    }

    /// Access hosted-zone lookup endpoints
    #[must_use]
    pub fn zones(&self) -> ZonesApi<'_> {
        ZonesApi::new(self)
    }

    /// Access record-set change endpoints
    #[must_use]
    pub fn records(&self) -> RecordsApi<'_> {
        RecordsApi::new(self)
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .bearer_auth(&self.inner.api_token)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(Error::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to an [`Error`]
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Prefer the provider's message field when the body carries one
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 => Err(Error::Unauthorized),
            _ => Err(Error::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`ZoneupClient`]
pub struct ZoneupClientBuilder {
    api_token: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ZoneupClientBuilder {
    /// Create a new builder with the given API token
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("zoneup/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> ZoneupClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        ZoneupClient {
            inner: Arc::new(ClientInner {
                http,
                api_token: self.api_token,
                base_url: self.base_url,
            }),
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
