//! Document Store
//!
//! Opaque asynchronous document API consumed by the data-access layer.
//! Collections hold schemaless JSON documents addressed by collection name
//! and id; every operation may fail with a classified [`StoreError`].

pub mod persistence;

pub use persistence::SledDocumentStore;

use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schemaless document fields
pub type Fields = Map<String, Value>;

/// A stored document: id plus its field map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

/// Document store interface
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document with generated id; returns the id
    async fn create_document(&self, collection: &str, fields: Fields)
        -> Result<String, StoreError>;

    /// Fetch one document, `None` if absent
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// All documents in a collection (unordered)
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Merge `fields` into an existing document
    ///
    /// Fails with a not-found error if the document is absent.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;

    /// Delete a document. Deleting an absent id succeeds.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
