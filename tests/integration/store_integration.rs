//! Integration tests for the sled-backed document store

use daybook::error::StoreError;
use daybook::store::{DocumentStore, SledDocumentStore};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

fn create_test_store() -> (SledDocumentStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = SledDocumentStore::new(temp_dir.path().join("store")).unwrap();
    (store, temp_dir)
}

fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (store, _temp_dir) = create_test_store();

    let id = store
        .create_document("diary", fields(&[("content", json!("hello"))]))
        .await
        .unwrap();

    let doc = store.get_document("diary", &id).await.unwrap().unwrap();
    assert_eq!(doc.id, id);
    assert_eq!(doc.fields["content"], json!("hello"));
}

#[tokio::test]
async fn get_missing_document_is_none() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.get_document("diary", "nope").await.unwrap().is_none());
}

#[tokio::test]
async fn collections_are_isolated() {
    let (store, _temp_dir) = create_test_store();

    let id = store
        .create_document("diary", fields(&[("content", json!("x"))]))
        .await
        .unwrap();

    assert!(store
        .get_document("restaurants", &id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(store.list_documents("restaurants").await.unwrap().len(), 0);
    assert_eq!(store.list_documents("diary").await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_merges_fields() {
    let (store, _temp_dir) = create_test_store();

    let id = store
        .create_document(
            "restaurants",
            fields(&[("name", json!("Noodle Bar")), ("rating", json!(3))]),
        )
        .await
        .unwrap();

    store
        .update_document("restaurants", &id, fields(&[("rating", json!(5))]))
        .await
        .unwrap();

    let doc = store
        .get_document("restaurants", &id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.fields["name"], json!("Noodle Bar"));
    assert_eq!(doc.fields["rating"], json!(5));
}

#[tokio::test]
async fn update_missing_document_is_not_found() {
    let (store, _temp_dir) = create_test_store();

    let err = store
        .update_document("diary", "ghost", fields(&[("content", json!("x"))]))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DocumentNotFound { .. }));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (store, _temp_dir) = create_test_store();

    let id = store
        .create_document("diary", fields(&[("content", json!("bye"))]))
        .await
        .unwrap();

    store.delete_document("diary", &id).await.unwrap();
    assert!(store.get_document("diary", &id).await.unwrap().is_none());

    // Absent id still succeeds
    store.delete_document("diary", &id).await.unwrap();
}

#[tokio::test]
async fn generated_ids_preserve_creation_order() {
    let (store, _temp_dir) = create_test_store();

    let mut ids = Vec::new();
    for i in 0..5 {
        let id = store
            .create_document("diary", fields(&[("n", json!(i))]))
            .await
            .unwrap();
        ids.push(id);
    }

    let listed: Vec<String> = store
        .list_documents("diary")
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(listed, ids);
}
