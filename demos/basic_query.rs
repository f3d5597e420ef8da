//! Basic usage example for the search client
//!
//! Expects a service at `http://localhost:8983/solr` with a `collection1`
//! core, or the location given in `SOLR_URL` / `SOLR_COLLECTION`.

use serde::Deserialize;
use solr_query::prelude::*;

#[derive(Debug, Deserialize)]
struct Titles {
    response: TitlePage,
}

#[derive(Debug, Deserialize)]
struct TitlePage {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<TitleDoc>,
}

#[derive(Debug, Deserialize)]
struct TitleDoc {
    id: String,
    #[serde(default)]
    title: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    solr_query::observability::init_observability("info", "pretty");

    let url = std::env::var("SOLR_URL").unwrap_or_else(|_| "http://localhost:8983/solr".to_string());
    let collection = std::env::var("SOLR_COLLECTION").unwrap_or_else(|_| "collection1".to_string());
    let client = SolrClient::connect(&url, collection)?;

    println!("=== Generic result ===");
    let search = client.query().q("title:add sucess 1").start(0).rows(15).search();
    println!("GET {}", search.url());

    match search.result().await {
        Ok(result) => {
            println!("{} found, showing {} from offset {}", result.num_found(), result.len(), result.start());
            for doc in result.docs() {
                println!("  {:?}", doc);
            }
        }
        Err(e) => {
            println!("Error when querying solr: {}", e);
            if let Some(msg) = e.service_message() {
                println!("  service said: {}", msg);
            }
            return Ok(());
        }
    }

    println!("\n=== Typed result with facets ===");
    let titles = client
        .query()
        .q("*:*")
        .field_list("id,title")
        .add_facet("cat")
        .facet_min_count(1)
        .rows(5)
        .result_target::<Titles>()
        .search()
        .result()
        .await?;

    println!("{} found", titles.response.num_found);
    for doc in titles.response.docs {
        println!("  {} {:?}", doc.id, doc.title);
    }

    Ok(())
}
