//! Decoding of search responses into generic or caller-defined shapes

pub mod models;

pub use models::{Document, DocumentCollection, ResponseHeader, SearchResult};

use models::RawEnvelope;

use crate::error::{Result, SolrError};
use crate::transport::RawResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Decode mode of a search, chosen when the query is built.
///
/// [`Envelope`] yields a [`SearchResult`]; [`Typed<T>`] decodes the whole body
/// into `T`. A query carries exactly one of them.
pub trait ResultTarget {
    type Output;

    fn decode(raw: &RawResponse) -> Result<Self::Output>;
}

/// Generic envelope decoding, the default target
#[derive(Debug, Clone, Copy, Default)]
pub struct Envelope;

/// Decoding straight into a caller-supplied type
#[derive(Debug, Clone, Copy, Default)]
pub struct Typed<T>(PhantomData<fn() -> T>);

impl ResultTarget for Envelope {
    type Output = SearchResult;

    fn decode(raw: &RawResponse) -> Result<SearchResult> {
        decode_envelope(raw)
    }
}

impl<T: DeserializeOwned> ResultTarget for Typed<T> {
    type Output = T;

    fn decode(raw: &RawResponse) -> Result<T> {
        decode_typed(raw)
    }
}

/// Decode into the generic envelope.
///
/// A JSON body without a `response` block decodes to an empty result rather
/// than an error.
pub fn decode_envelope(raw: &RawResponse) -> Result<SearchResult> {
    ensure_success(raw)?;

    let value: Value = serde_json::from_slice(&raw.body)?;
    let result = if value.is_object() {
        SearchResult::from(serde_json::from_slice::<RawEnvelope>(&raw.body)?)
    } else {
        debug!("Response body is not a JSON object, returning empty result");
        SearchResult::default()
    };

    debug!(
        "Decoded {} of {} documents from offset {}",
        result.len(),
        result.num_found(),
        result.start()
    );
    Ok(result)
}

/// Decode the whole body into `T`
pub fn decode_typed<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    ensure_success(raw)?;
    Ok(serde_json::from_slice(&raw.body)?)
}

fn ensure_success(raw: &RawResponse) -> Result<()> {
    if raw.is_success() {
        return Ok(());
    }

    let body = raw.body_text();
    warn!("Search service returned status {}: {}", raw.status, body);
    Err(SolrError::Service {
        status: raw.status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn ok(body: &'static str) -> RawResponse {
        RawResponse::new(200, body)
    }

    #[test]
    fn test_decode_envelope() {
        let raw = ok(r#"{"response":{"numFound":2,"start":0,"docs":[{"id":"a"},{"id":"b"}]}}"#);
        let result = decode_envelope(&raw).unwrap();

        assert_eq!(result.num_found(), 2);
        assert_eq!(result.start(), 0);
        assert_eq!(result.len(), 2);
        assert_eq!(result.docs()[0]["id"], "a");
        assert_eq!(result.docs()[1]["id"], "b");
    }

    #[test]
    fn test_missing_wrapper_yields_empty_result() {
        let result = decode_envelope(&ok(r#"{"responseHeader":{"status":0,"QTime":1}}"#)).unwrap();
        assert_eq!(result.num_found(), 0);
        assert_eq!(result.start(), 0);
        assert!(result.is_empty());
        assert_eq!(result.response_header.unwrap().qtime, 1);

        let result = decode_envelope(&ok(r#"{"response":null}"#)).unwrap();
        assert!(result.is_empty());

        let result = decode_envelope(&ok("[1,2,3]")).unwrap();
        assert_eq!(result, SearchResult::default());
    }

    #[test]
    fn test_odd_side_blocks_do_not_fail_decode() {
        let result = decode_envelope(&ok(r#"{"responseHeader":"x"}"#)).unwrap();
        assert!(result.is_empty());
        assert!(result.response_header.is_none());

        let result = decode_envelope(&ok(
            r#"{"responseHeader":{"status":0,"QTime":1.5},"response":{"numFound":1,"start":0,"docs":[{"id":"a"}]}}"#,
        ))
        .unwrap();
        assert_eq!(result.num_found(), 1);
        assert!(result.response_header.is_none());

        let result = decode_envelope(&ok(
            r#"{"nextCursorMark":7,"response":{"numFound":1,"start":0,"docs":[{"id":"a"}]}}"#,
        ))
        .unwrap();
        assert_eq!(result.docs()[0]["id"], "a");
        assert!(result.next_cursor_mark.is_none());
    }

    #[test]
    fn test_decode_error_keeps_position() {
        let err = decode_envelope(&ok("{\n\"response\": {\"numFound\": \"many\"}}")).unwrap_err();
        match err {
            SolrError::Decode(e) => assert_eq!(e.line(), 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fewer_docs_than_found() {
        let raw = ok(r#"{"response":{"numFound":120,"start":100,"docs":[{"id":"x"}]}}"#);
        let result = decode_envelope(&raw).unwrap();

        assert_eq!(result.num_found(), 120);
        assert_eq!(result.start(), 100);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = decode_envelope(&ok(r#"{"response":{"numFound":"#)).unwrap_err();
        assert!(matches!(err, SolrError::Decode(_)));
    }

    #[test]
    fn test_incompatible_block_is_decode_error() {
        let err = decode_envelope(&ok(r#"{"response":{"numFound":"many"}}"#)).unwrap_err();
        assert!(matches!(err, SolrError::Decode(_)));
    }

    #[test]
    fn test_non_success_status_is_service_error() {
        let raw = RawResponse::new(
            404,
            r#"{"response":{"numFound":0,"start":0,"docs":[]}}"#,
        );

        match decode_envelope(&raw).unwrap_err() {
            SolrError::Service { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("numFound"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(
            decode_typed::<Value>(&raw),
            Err(SolrError::Service { status: 404, .. })
        ));
    }

    #[test]
    fn test_facets_and_highlighting_are_kept() {
        let raw = ok(r#"{
            "response":{"numFound":1,"start":0,"docs":[{"id":"1"}]},
            "facet_counts":{"facet_fields":{"cat":["book",1]}},
            "facets":{"count":1},
            "highlighting":{"1":{"title":["<em>rust</em>"]}},
            "nextCursorMark":"AoE="
        }"#);
        let result = decode_envelope(&raw).unwrap();

        assert_eq!(result.facet_counts.unwrap()["facet_fields"]["cat"][0], "book");
        assert_eq!(result.facets.unwrap()["count"], 1);
        assert!(result.highlighting.is_some());
        assert_eq!(result.next_cursor_mark.as_deref(), Some("AoE="));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Book {
        id: String,
        title: String,
    }

    #[derive(Debug, Deserialize)]
    struct BookResponse {
        response: BookPage,
    }

    #[derive(Debug, Deserialize)]
    struct BookPage {
        #[serde(rename = "numFound")]
        num_found: u64,
        docs: Vec<Book>,
    }

    #[test]
    fn test_typed_target_populates_fields() {
        let raw = ok(r#"{"response":{"numFound":1,"start":0,"docs":[{"id":"1","title":"Dune"}]}}"#);
        let page = <Typed<BookResponse> as ResultTarget>::decode(&raw).unwrap();

        assert_eq!(page.response.num_found, 1);
        assert_eq!(
            page.response.docs,
            vec![Book { id: "1".to_string(), title: "Dune".to_string() }]
        );
    }

    #[test]
    fn test_typed_target_missing_field_is_decode_error() {
        let raw = ok(r#"{"response":{"numFound":1,"docs":[{"id":"1"}]}}"#);
        let err = decode_typed::<BookResponse>(&raw).unwrap_err();
        assert!(matches!(err, SolrError::Decode(_)));
    }

    #[test]
    fn test_docs_as_converts_documents() {
        let raw = ok(r#"{"response":{"numFound":1,"start":0,"docs":[{"id":"7","title":"Emma","extra":true}]}}"#);
        let result = <Envelope as ResultTarget>::decode(&raw).unwrap();
        let books: Vec<Book> = result.docs_as().unwrap();

        assert_eq!(books[0].title, "Emma");
    }
}
