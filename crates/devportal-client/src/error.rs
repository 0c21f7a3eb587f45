//! Error types for remote data adapters.

use devportal_model::FlowNetwork;
use thiserror::Error;

/// Errors raised while fetching or shaping remote data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport failure (DNS, connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    /// Failed to parse a JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The chain client rejected a query or transaction.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// No address is configured for a contract on the selected network.
    #[error("missing contract address for {contract} on {network}")]
    MissingContractAddress {
        network: FlowNetwork,
        contract: String,
    },

    /// Invalid configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading config or cache files.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClientError {
    /// A short message suitable for showing in place of the missing content.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the server. Please check your connection.",
            Self::Http { status, .. } if *status == 404 => "The requested content was not found.",
            Self::Http { status, .. } if *status == 429 => {
                "Too many requests. Please try again later."
            }
            Self::Http { .. } | Self::JsonParse(_) => "The server returned an unexpected response.",
            Self::Gateway(_) => "The blockchain request failed.",
            Self::MissingContractAddress { .. } | Self::Config(_) | Self::Io(_) => {
                "An unexpected error occurred."
            }
        }
    }

    /// Whether repeating the same request could succeed.
    ///
    /// Informational only: adapters never retry on their own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Io(_) => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
