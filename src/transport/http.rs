//! reqwest-backed transport

use super::{HttpTransport, RawResponse};
use crate::config::TransportConfig;
use crate::error::{SolrError, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

/// Transport performing GET requests with a shared reqwest client
pub struct ReqwestTransport {
    http_client: Client,
    credentials: Option<(String, Secret<String>)>,
}

impl ReqwestTransport {
    /// Create a new transport from configuration
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(SolrError::Transport)?;

        let credentials = match (&config.username, &config.password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        };

        info!(
            "Initialized HTTP transport with timeout={}s basic_auth={}",
            config.timeout_secs,
            credentials.is_some()
        );

        Ok(Self {
            http_client,
            credentials,
        })
    }

    /// Create transport with custom HTTP client
    pub fn with_http_client(http_client: Client) -> Self {
        Self {
            http_client,
            credentials: None,
        }
    }

    /// Send basic auth credentials with every request
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: Secret<String>) -> Self {
        self.credentials = Some((username.into(), password));
        self
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse> {
        let mut request = self.http_client.get(url.clone());
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, Some(password.expose_secret()));
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url.path(), e);
            SolrError::Transport(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(SolrError::Transport)?;
        debug!("Received status {} with {} bytes", status, body.len());

        Ok(RawResponse { status, body })
    }
}
