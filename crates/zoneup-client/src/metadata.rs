//! Instance metadata service client.
//!
//! One GET against the link-local metadata endpoint, no retry. A host that
//! cannot read its own metadata has nothing to register.

use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::debug;
use zoneup_core::{Error, RecordKind, Result};

/// Well-known instance metadata base URL
const DEFAULT_BASE_URL: &str = "http://169.254.169.254/latest/meta-data";

/// Timeout for metadata requests; the endpoint is link-local and fast
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the instance metadata service
#[derive(Clone)]
pub struct MetadataClient {
    http: HttpClient,
    base_url: String,
}

impl MetadataClient {
    /// Create a client against the well-known metadata endpoint
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (useful for testing)
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the metadata value backing the given record kind: the private
    /// IPv4 address for A records, the public hostname for CNAME records.
    pub async fn fetch(&self, kind: RecordKind) -> Result<String> {
        self.get(kind.metadata_path()).await
    }

    /// Fetch a raw metadata path, returning the trimmed response body
    pub async fn get(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "metadata request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Metadata(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Metadata(format!(
                "metadata service returned {status} for {path}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Metadata(e.to_string()))?;
        Ok(body.trim().to_string())
    }
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new()
    }
}
