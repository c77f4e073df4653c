//! Sled-backed document store.
//!
//! One sled tree per collection, JSON-encoded field maps as values.
//! Stands in for the remote document provider behind the same interface.

use crate::error::StoreError;
use crate::store::{Document, DocumentStore, Fields};
use async_trait::async_trait;
use sled::{Db, Tree};
use std::path::Path;

/// Sled-based implementation of DocumentStore
pub struct SledDocumentStore {
    db: Db,
}

impl SledDocumentStore {
    /// Open (or create) a document store at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// The underlying sled database (for advanced operations)
    pub fn db(&self) -> &Db {
        &self.db
    }

    fn tree(&self, collection: &str) -> Result<Tree, StoreError> {
        Ok(self.db.open_tree(collection)?)
    }

    fn next_id(&self) -> Result<String, StoreError> {
        // Zero-padded so lexicographic key order matches creation order
        Ok(format!("{:016x}", self.db.generate_id()?))
    }
}

#[async_trait]
impl DocumentStore for SledDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        fields: Fields,
    ) -> Result<String, StoreError> {
        let tree = self.tree(collection)?;
        let id = self.next_id()?;
        let value = serde_json::to_vec(&fields)?;
        tree.insert(id.as_bytes(), value)?;
        Ok(id)
    }

    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let tree = self.tree(collection)?;
        let Some(raw) = tree.get(id.as_bytes())? else {
            return Ok(None);
        };
        let fields: Fields = serde_json::from_slice(&raw)?;
        Ok(Some(Document {
            id: id.to_string(),
            fields,
        }))
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let tree = self.tree(collection)?;
        let mut out = Vec::new();
        for entry in tree.iter() {
            let (key, value) = entry?;
            let id = String::from_utf8_lossy(&key).to_string();
            let fields: Fields = serde_json::from_slice(&value)?;
            out.push(Document { id, fields });
        }
        Ok(out)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let tree = self.tree(collection)?;
        let Some(raw) = tree.get(id.as_bytes())? else {
            return Err(StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        };
        let mut existing: Fields = serde_json::from_slice(&raw)?;
        for (key, value) in fields {
            existing.insert(key, value);
        }
        let value = serde_json::to_vec(&existing)?;
        tree.insert(id.as_bytes(), value)?;
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let tree = self.tree(collection)?;
        tree.remove(id.as_bytes())?;
        Ok(())
    }
}
