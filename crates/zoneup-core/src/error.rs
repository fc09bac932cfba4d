use thiserror::Error;

/// Result type alias for zoneup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering a host record
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication failed - invalid or missing API token
    #[error("authentication failed: invalid API token")]
    Unauthorized,

    /// The DNS API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zone-name lookup succeeded but matched no hosted zone
    #[error("no hosted zone found for {zone}")]
    ZoneNotFound {
        /// The zone name that was looked up
        zone: String,
    },

    /// Zone-name lookup kept failing until the retry budget ran out
    #[error("zone lookup failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        /// How many lookups were attempted
        attempts: u32,
        /// The error from the final attempt
        #[source]
        last: Box<Error>,
    },

    /// The instance metadata service could not be queried
    #[error("metadata fetch failed: {0}")]
    Metadata(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the HTTP status code if the API reported one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
