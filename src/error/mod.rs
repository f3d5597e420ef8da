//! Error types for the search client

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for search client operations
pub type Result<T> = std::result::Result<T, SolrError>;

/// Main error type for the search client
#[derive(Error, Debug)]
pub enum SolrError {
    /// The HTTP exchange could not be completed (connection refused, timeout, DNS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    TransportMessage(String),

    /// The service answered with a non-success status
    #[error("Service error: status {status}: {body}")]
    Service { status: u16, body: String },

    /// The body is not JSON, or does not fit the requested shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error block Solr embeds in failed responses
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorDetail {
    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    error: ServiceErrorDetail,
}

impl SolrError {
    /// HTTP status of a service error
    pub fn status(&self) -> Option<u16> {
        match self {
            SolrError::Service { status, .. } => Some(*status),
            SolrError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parsed `error` block of a service error body, if the body carries one
    pub fn service_detail(&self) -> Option<ServiceErrorDetail> {
        match self {
            SolrError::Service { body, .. } => serde_json::from_str::<ServiceErrorBody>(body)
                .ok()
                .map(|b| b.error),
            _ => None,
        }
    }

    /// The `msg` Solr reported for a failed request
    pub fn service_message(&self) -> Option<String> {
        self.service_detail().and_then(|d| d.msg)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SolrError::Transport(_) | SolrError::TransportMessage(_))
    }
}

impl From<config::ConfigError> for SolrError {
    fn from(err: config::ConfigError) -> Self {
        SolrError::Config(err.to_string())
    }
}
