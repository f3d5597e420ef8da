//! Endpoint and collection addressing

use crate::error::{Result, SolrError};
use crate::params::ParameterSet;
use url::Url;

/// Path segment of the search request handler
pub const SELECT_PATH: &str = "select";

/// Immutable address of one collection on a search service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    base_url: Url,
    collection: String,
}

impl Connection {
    /// Create a connection to `collection` under the `base_url` endpoint,
    /// e.g. `http://localhost:8983/solr` and `collection1`.
    pub fn new(base_url: &str, collection: impl Into<String>) -> Result<Self> {
        let collection = collection.into();
        if collection.trim().is_empty() {
            return Err(SolrError::Config("Collection name cannot be empty".to_string()));
        }

        let mut base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SolrError::Config(format!(
                "Search service URL must use http or https: {}",
                base_url
            )));
        }

        let trimmed = base_url.path().trim_end_matches('/').to_string();
        base_url.set_path(&trimmed);
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(Self { base_url, collection })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// `<endpoint>/<collection>/select?<params>`
    pub fn select_url(&self, params: &ParameterSet) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.collection).push(SELECT_PATH);
        }

        let query = params.serialize();
        url.set_query(if query.is_empty() { None } else { Some(query.as_str()) });
        url
    }
}
