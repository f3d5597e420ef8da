//! Fluent builder for search requests
//!
//! Each method writes one or more entries into the underlying
//! [`ParameterSet`] under the literal parameter name the service expects.
//! Arguments are passed through verbatim; syntax errors in query fragments
//! are reported by the service, not here.

use crate::client::SolrClient;
use crate::params::ParameterSet;
use crate::response::{Envelope, ResultTarget, Typed};
use crate::search::Search;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Accumulates the parameters of one search request
pub struct QueryBuilder<'a, R = Envelope> {
    client: &'a SolrClient,
    params: ParameterSet,
    target: PhantomData<R>,
}

impl<'a> QueryBuilder<'a, Envelope> {
    pub fn new(client: &'a SolrClient) -> Self {
        Self {
            client,
            params: ParameterSet::new(),
            target: PhantomData,
        }
    }
}

impl<'a, R: ResultTarget> QueryBuilder<'a, R> {
    pub fn add_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.add(key, value);
        self
    }

    pub fn set_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    pub fn remove_param(mut self, key: &str) -> Self {
        self.params.remove(key);
        self
    }

    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Main query, e.g. `id:100`
    pub fn q(self, query: impl Into<String>) -> Self {
        self.add_param("q", query)
    }

    /// Sort clause, e.g. `geodist() asc`
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.add_param("sort", sort)
    }

    /// Filter query, e.g. `popularity:[10 TO *]`. Repeated calls are ANDed.
    pub fn filter_query(self, fq: impl Into<String>) -> Self {
        self.add_param("fq", fq)
    }

    /// Fields to return, e.g. `id,name,description`
    pub fn field_list(self, fl: impl Into<String>) -> Self {
        self.add_param("fl", fl)
    }

    /// Facet on a field. Turns faceting on.
    pub fn add_facet(self, field: impl Into<String>) -> Self {
        self.set_param("facet", "true").add_param("facet.field", field)
    }

    /// Facet on an arbitrary query, e.g. `price:[* TO 500]`. Turns faceting on.
    pub fn add_facet_query(self, query: impl Into<String>) -> Self {
        self.set_param("facet", "true").add_param("facet.query", query)
    }

    pub fn facet_min_count(self, min_count: u64) -> Self {
        self.set_param("facet.mincount", min_count.to_string())
    }

    /// Pivot facet over comma separated fields, e.g. `cat,inStock`.
    ///
    /// Unlike [`add_facet`](Self::add_facet) this does not set `facet=true`;
    /// callers that only request pivots must enable faceting themselves.
    pub fn add_facet_pivot(self, fields: impl Into<String>) -> Self {
        self.add_param("facet.pivot", fields)
    }

    pub fn facet_pivot_min_count(self, min_count: u64) -> Self {
        self.set_param("facet.pivot.mincount", min_count.to_string())
    }

    /// Raw JSON facet expression, e.g. `{avg_price:"avg(price)"}`
    pub fn add_json_facet(self, json_facet: impl Into<String>) -> Self {
        self.add_param("json.facet", json_facet)
    }

    /// Distance filter around a point.
    ///
    /// Adds `fq={!geofilt pt=<lat>,<lon> sfield=<sfield> d=<distance>}`.
    pub fn geofilt(self, latitude: f64, longitude: f64, sfield: &str, distance: f64) -> Self {
        let fq = format!(
            "{{!geofilt pt={},{} sfield={} d={}}}",
            latitude, longitude, sfield, distance
        );
        self.add_param("fq", fq)
    }

    /// Query parser, e.g. `dismax`
    pub fn def_type(self, def_type: impl Into<String>) -> Self {
        self.add_param("defType", def_type)
    }

    /// Boost functions, e.g. `ord(popularity)^0.5 recip(rord(price),1,1000,1000)^0.3`
    pub fn boost_functions(self, bf: impl Into<String>) -> Self {
        self.add_param("bf", bf)
    }

    pub fn boost_query(self, bq: impl Into<String>) -> Self {
        self.add_param("bq", bq)
    }

    /// Weighted query fields, e.g. `features^20.0 text^0.3`
    pub fn query_fields(self, qf: impl Into<String>) -> Self {
        self.add_param("qf", qf)
    }

    /// Offset of the first returned document
    pub fn start(self, start: u64) -> Self {
        self.set_param("start", start.to_string())
    }

    /// Maximum number of documents to return
    pub fn rows(self, rows: u64) -> Self {
        self.set_param("rows", rows.to_string())
    }

    /// Decode responses into `T` instead of the generic [`SearchResult`](crate::response::SearchResult)
    pub fn result_target<T: DeserializeOwned>(self) -> QueryBuilder<'a, Typed<T>> {
        QueryBuilder {
            client: self.client,
            params: self.params,
            target: PhantomData,
        }
    }

    /// Snapshot the parameters into a search handle. No I/O happens here.
    pub fn search(&self) -> Search<'a, R> {
        Search::new(self.client, self.params.clone())
    }
}

impl<R> fmt::Display for QueryBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.params, f)
    }
}

impl<R> fmt::Debug for QueryBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("collection", &self.client.connection().collection())
            .field("params", &self.params)
            .finish()
    }
}
