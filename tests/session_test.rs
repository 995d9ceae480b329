//! Session and query behavior: endpoint routing, id/slug resolution, and
//! model hydration through the client boundary.

use std::sync::Arc;

use serde_json::json;

use genoflow_sdk::mock::MockApi;
use genoflow_sdk::{Filter, SdkError, Session};

fn session_with(api: &Arc<MockApi>) -> Session {
    Session::new(api.clone())
}

#[tokio::test]
async fn get_resolves_by_id() {
    let api = MockApi::new();
    api.stub_filter("collection", vec![json!({"id": 42, "slug": "rna-seq"})]);
    let session = session_with(&api);

    let collection = session.collection().get(42u64).await.unwrap();
    assert_eq!(collection.id(), 42);
    assert_eq!(collection.slug(), Some("rna-seq"));

    let params = api.filter_params("collection");
    assert_eq!(params[0].get("id").map(String::as_str), Some("42"));
}

#[tokio::test]
async fn get_resolves_digit_strings_as_ids_and_the_rest_as_slugs() {
    let api = MockApi::new();
    api.stub_filter("collection", vec![json!({"id": 42, "slug": "rna-seq"})]);
    let session = session_with(&api);

    session.collection().get("42").await.unwrap();
    session.collection().get("rna-seq").await.unwrap();

    let params = api.filter_params("collection");
    assert_eq!(params[0].get("id").map(String::as_str), Some("42"));
    assert_eq!(params[1].get("slug").map(String::as_str), Some("rna-seq"));
}

#[tokio::test]
async fn get_reports_missing_and_ambiguous_matches() {
    let api = MockApi::new();
    let session = session_with(&api);

    let err = session.collection().get(1u64).await.unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)));

    api.stub_filter("collection", vec![json!({"id": 1}), json!({"id": 2})]);
    let err = session.collection().get(1u64).await.unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
}

#[tokio::test]
async fn filter_hydrates_typed_wrappers() {
    let api = MockApi::new();
    api.stub_filter(
        "data",
        vec![
            json!({"id": 1, "process_type": "data:reads:fastq:single:"}),
            json!({"id": 2, "process_type": "data:expression:"}),
        ],
    );
    let session = session_with(&api);

    let items = session
        .data()
        .filter(Filter::new().param("status", "OK"))
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].process_type(), "data:expression:");

    let params = api.filter_params("data");
    assert_eq!(params[0].get("status").map(String::as_str), Some("OK"));
}

#[tokio::test]
async fn presample_queries_use_the_presample_endpoint() {
    let api = MockApi::new();
    api.stub_filter("presample", vec![json!({"id": 42})]);
    let session = session_with(&api);

    let sample = session.presample().get(42u64).await.unwrap();
    assert!(sample.is_presample());

    // A presample obtained this way can be confirmed.
    sample.confirm_is_annotated().await.unwrap();
    assert_eq!(api.filter_count("presample"), 1);

    // Samples from the regular endpoint cannot.
    api.stub_filter("sample", vec![json!({"id": 42})]);
    let sample = session.sample().get(42u64).await.unwrap();
    assert!(!sample.is_presample());
    assert!(sample.confirm_is_annotated().await.is_err());
}

#[tokio::test]
async fn refresh_reapplies_the_server_model() {
    let api = MockApi::new();
    api.stub_filter(
        "collection",
        vec![json!({"id": 42, "description": "updated", "data": [1, 2]})],
    );
    let session = session_with(&api);

    let mut collection = session.collection().get(42u64).await.unwrap();
    collection.set_data(vec![9]);

    collection.refresh().await.unwrap();
    assert_eq!(collection.data_ids(), &[1, 2]);
    assert_eq!(collection.description, Some(json!("updated")));
    assert!(!collection.is_data_hydrated());
}

#[tokio::test]
async fn process_queries_expose_unpacked_versions() {
    let api = MockApi::new();
    api.stub_filter(
        "process",
        vec![json!({
            "id": 7,
            "slug": "alignment-bowtie",
            "version": 16809987,
            "type": "data:alignment:bam:",
        })],
    );
    let session = session_with(&api);

    let process = session.process().get("alignment-bowtie").await.unwrap();
    assert_eq!(process.version(), "1.2.3");
    assert_eq!(process.model().process_type, "data:alignment:bam:");
}
