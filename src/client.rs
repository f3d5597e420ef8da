//! Connection handle tying an endpoint to a transport

use crate::config::{SolrConfig, TransportConfig};
use crate::connection::Connection;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Client for one collection of a search service.
///
/// Immutable once built; clone it or wrap it in an `Arc` to share between
/// tasks. Every [`QueryBuilder`] borrows the client it was created from.
#[derive(Clone)]
pub struct SolrClient {
    connection: Connection,
    transport: Arc<dyn HttpTransport>,
}

impl SolrClient {
    /// Create a client over an explicit transport
    pub fn new(connection: Connection, transport: Arc<dyn HttpTransport>) -> Self {
        info!(
            "Created search client for collection '{}' at {}",
            connection.collection(),
            connection.base_url()
        );
        Self { connection, transport }
    }

    /// Create a client with the default reqwest transport
    pub fn connect(base_url: &str, collection: impl Into<String>) -> Result<Self> {
        let connection = Connection::new(base_url, collection)?;
        let transport = ReqwestTransport::new(&TransportConfig::default())?;
        Ok(Self::new(connection, Arc::new(transport)))
    }

    /// Create a client from validated configuration
    pub fn from_config(config: &SolrConfig) -> Result<Self> {
        config.validate()?;
        let connection = Connection::new(&config.connection.url, config.connection.collection.clone())?;
        let transport = ReqwestTransport::new(&config.transport)?;
        Ok(Self::new(connection, Arc::new(transport)))
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    /// Start a new query against this client's collection
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(self)
    }
}

impl fmt::Debug for SolrClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolrClient")
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}
