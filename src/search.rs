//! Execution of a built query against the service

use crate::client::SolrClient;
use crate::error::Result;
use crate::params::ParameterSet;
use crate::response::{Envelope, ResultTarget};
use crate::transport::RawResponse;
use std::marker::PhantomData;
use std::time::Instant;
use tracing::{debug, error};
use url::Url;

/// Response writer parameter
const WRITER_PARAM: &str = "wt";

/// A finalized query bound to its client, ready to run.
///
/// Running it twice sends the same request twice.
pub struct Search<'a, R = Envelope> {
    client: &'a SolrClient,
    params: ParameterSet,
    target: PhantomData<R>,
}

impl<'a, R: ResultTarget> Search<'a, R> {
    pub(crate) fn new(client: &'a SolrClient, mut params: ParameterSet) -> Self {
        if !params.contains_key(WRITER_PARAM) {
            params.set(WRITER_PARAM, "json");
        }

        Self {
            client,
            params,
            target: PhantomData,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Full request URL, `<endpoint>/<collection>/select?<params>`
    pub fn url(&self) -> Url {
        self.client.connection().select_url(&self.params)
    }

    /// Send the request and return the raw status and body
    pub async fn execute(&self) -> Result<RawResponse> {
        let url = self.url();
        debug!(
            "Searching collection '{}' with {}",
            self.client.connection().collection(),
            self.params
        );

        let started = Instant::now();
        let raw = self.client.transport().get(&url).await.map_err(|e| {
            error!("Search request failed: {}", e);
            e
        })?;

        debug!(
            "Search returned status {} in {}ms",
            raw.status,
            started.elapsed().as_millis()
        );
        Ok(raw)
    }

    /// Send the request and decode the body into the registered target
    pub async fn result(&self) -> Result<R::Output> {
        let raw = self.execute().await?;
        R::decode(&raw)
    }
}
