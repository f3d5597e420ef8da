//! Solr Query - fluent search requests for Solr-style document search services
//!
//! This library builds search requests from typed fluent calls, sends them to
//! a collection's `select` handler over HTTP, and decodes the JSON response
//! either into a generic result or into a caller-defined type.
//!
//! ## Features
//!
//! - **Ordered parameters**: repeated filters and facets keep their call order
//! - **Protocol-aware builder**: faceting, geo filters, DisMax boosts, paging
//! - **Typed decoding**: register any `serde` type as the result target
//! - **Pluggable transport**: reqwest by default, any `HttpTransport` in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solr_query::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SolrClient::connect("http://localhost:8983/solr", "collection1")?;
//!
//!     let result = client
//!         .query()
//!         .q("title:rust")
//!         .filter_query("inStock:true")
//!         .start(0)
//!         .rows(15)
//!         .search()
//!         .result()
//!         .await?;
//!
//!     println!("{} documents found", result.num_found());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod observability;
pub mod params;
pub mod query;
pub mod response;
pub mod search;
pub mod transport;

pub use client::SolrClient;
pub use config::SolrConfig;
pub use error::{SolrError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::SolrClient;
    pub use crate::config::SolrConfig;
    pub use crate::connection::Connection;
    pub use crate::error::{SolrError, Result};
    pub use crate::params::ParameterSet;
    pub use crate::query::QueryBuilder;
    pub use crate::response::{Document, Envelope, ResultTarget, SearchResult, Typed};
    pub use crate::search::Search;
    pub use crate::transport::{HttpTransport, RawResponse, ReqwestTransport};
}
