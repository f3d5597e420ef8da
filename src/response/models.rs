//! Data models for search responses

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored document, field names in service order
pub type Document = Map<String, Value>;

/// `responseHeader` block echoed by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Service-side status, 0 on success
    #[serde(default)]
    pub status: i64,

    /// Query time in milliseconds
    #[serde(rename = "QTime", default)]
    pub qtime: u64,

    /// Request parameters as the service saw them
    #[serde(default)]
    pub params: Option<Value>,
}

/// The `response` block: match count, offset and the page of documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentCollection {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,

    #[serde(default)]
    pub start: u64,

    #[serde(rename = "maxScore", default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,

    #[serde(default)]
    pub docs: Vec<Document>,
}

/// Generic decoded search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "responseHeader", default, skip_serializing_if = "Option::is_none")]
    pub response_header: Option<ResponseHeader>,

    #[serde(rename = "response", default)]
    pub results: DocumentCollection,

    /// Classic faceting output (`facet.field`, `facet.query`, `facet.pivot`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet_counts: Option<Value>,

    /// JSON facet output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighting: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped: Option<Value>,

    #[serde(rename = "nextCursorMark", default, skip_serializing_if = "Option::is_none")]
    pub next_cursor_mark: Option<String>,
}

/// Wire form of the envelope.
///
/// Only `response` is decoded strictly; the other blocks are kept as raw JSON
/// so an unexpected shape there cannot fail the whole decode.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(default)]
    pub response: Option<DocumentCollection>,

    #[serde(rename = "responseHeader", default)]
    pub response_header: Option<Value>,

    #[serde(default)]
    pub facet_counts: Option<Value>,

    #[serde(default)]
    pub facets: Option<Value>,

    #[serde(default)]
    pub highlighting: Option<Value>,

    #[serde(default)]
    pub stats: Option<Value>,

    #[serde(default)]
    pub grouped: Option<Value>,

    #[serde(rename = "nextCursorMark", default)]
    pub next_cursor_mark: Option<Value>,
}

impl From<RawEnvelope> for SearchResult {
    fn from(raw: RawEnvelope) -> Self {
        Self {
            response_header: raw
                .response_header
                .and_then(|header| serde_json::from_value(header).ok()),
            results: raw.response.unwrap_or_default(),
            facet_counts: raw.facet_counts,
            facets: raw.facets,
            highlighting: raw.highlighting,
            stats: raw.stats,
            grouped: raw.grouped,
            next_cursor_mark: raw
                .next_cursor_mark
                .and_then(|mark| mark.as_str().map(str::to_string)),
        }
    }
}

impl SearchResult {
    pub fn num_found(&self) -> u64 {
        self.results.num_found
    }

    pub fn start(&self) -> u64 {
        self.results.start
    }

    pub fn docs(&self) -> &[Document] {
        &self.results.docs
    }

    /// Number of documents in this page
    pub fn len(&self) -> usize {
        self.results.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.docs.is_empty()
    }

    /// Convert every document into `D`
    pub fn docs_as<D: DeserializeOwned>(&self) -> serde_json::Result<Vec<D>> {
        self.results
            .docs
            .iter()
            .map(|doc| serde_json::from_value(Value::Object(doc.clone())))
            .collect()
    }
}
