//! Records API
//!
//! Data-access surface for journal entries and place reviews. Every store
//! call is routed through the resilient executor with a context label and
//! per-operation behavior options: writes retry transient failures and push
//! a success toast, reads retry without toasting. Callers receive a tagged
//! result; a failed write rejects so surrounding flows (e.g. a form) do not
//! proceed as if it had succeeded.

use crate::config::DaybookConfig;
use crate::diagnostics::ErrorLog;
use crate::error::{ExecError, StoreError};
use crate::executor::{ExecOptions, Executor};
use crate::notify::NotificationQueue;
use crate::records::{
    from_document, to_fields, DiaryDraft, DiaryEntry, Restaurant, RestaurantDraft,
    DIARY_COLLECTION, RESTAURANT_COLLECTION,
};
use crate::store::{DocumentStore, SledDocumentStore};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// Data-access service for daybook records
pub struct RecordsApi {
    store: Arc<dyn DocumentStore>,
    executor: Arc<Executor>,
    notifications: Arc<NotificationQueue>,
    errors: Arc<ErrorLog>,
    defaults: ExecOptions,
}

impl RecordsApi {
    /// Assemble the API over an existing store with freshly wired
    /// notification queue, error log, and executor.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_options(store, ExecOptions::store_defaults())
    }

    /// Assemble with custom base options for store calls
    pub fn with_options(store: Arc<dyn DocumentStore>, defaults: ExecOptions) -> Self {
        Self::assemble(store, defaults, Arc::new(NotificationQueue::new()))
    }

    /// Open a sled-backed API from configuration
    pub fn open(config: &DaybookConfig) -> Result<Self, StoreError> {
        let store = Arc::new(SledDocumentStore::new(config.storage.resolved_path())?);
        let notifications = Arc::new(NotificationQueue::with_display_duration(
            config.notifications.display_duration(),
        ));
        Ok(Self::assemble(
            store,
            config.executor.store_options(),
            notifications,
        ))
    }

    fn assemble(
        store: Arc<dyn DocumentStore>,
        defaults: ExecOptions,
        notifications: Arc<NotificationQueue>,
    ) -> Self {
        let errors = Arc::new(ErrorLog::new(Arc::clone(&notifications)));
        let executor = Arc::new(Executor::new(
            Arc::clone(&notifications),
            Arc::clone(&errors),
        ));
        Self {
            store,
            executor,
            notifications,
            errors,
            defaults,
        }
    }

    /// Shared loading indicator for the UI
    pub fn is_loading(&self) -> bool {
        self.executor.is_loading()
    }

    pub fn notifications(&self) -> &Arc<NotificationQueue> {
        &self.notifications
    }

    pub fn errors(&self) -> &Arc<ErrorLog> {
        &self.errors
    }

    pub fn executor(&self) -> &Arc<Executor> {
        &self.executor
    }

    fn write_options(&self, success_message: &str) -> ExecOptions {
        self.defaults.clone().with_success_toast(success_message)
    }

    // === Journal entries ===

    /// Create a journal entry; returns the stored entry with its id
    pub async fn create_diary(&self, draft: DiaryDraft) -> Result<DiaryEntry, ExecError> {
        let entry = DiaryEntry {
            id: String::new(),
            date: draft.date,
            content: draft.content,
            created_at: Utc::now(),
        };
        let store = Arc::clone(&self.store);
        let record = entry.clone();
        let id = self
            .executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    let record = record.clone();
                    async move {
                        let fields = to_fields(&record)?;
                        store.create_document(DIARY_COLLECTION, fields).await
                    }
                },
                "diary.create",
                self.write_options("Entry saved."),
            )
            .await?;
        Ok(DiaryEntry { id, ..entry })
    }

    /// All journal entries, newest first
    pub async fn list_diary(&self) -> Result<Vec<DiaryEntry>, ExecError> {
        let store = Arc::clone(&self.store);
        let mut entries = self
            .executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    async move {
                        let docs = store.list_documents(DIARY_COLLECTION).await?;
                        docs.into_iter()
                            .map(from_document::<DiaryEntry>)
                            .collect::<Result<Vec<_>, _>>()
                    }
                },
                "diary.list",
                self.defaults.clone(),
            )
            .await?;
        entries.sort_by_key(|e| std::cmp::Reverse(e.created_at));
        Ok(entries)
    }

    /// Rewrite the date and content of an existing entry
    pub async fn update_diary(
        &self,
        id: &str,
        draft: DiaryDraft,
    ) -> Result<(), ExecError> {
        let store = Arc::clone(&self.store);
        let id = id.to_string();
        self.executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    let id = id.clone();
                    let draft = draft.clone();
                    async move {
                        let fields = to_fields(&draft)?;
                        store.update_document(DIARY_COLLECTION, &id, fields).await
                    }
                },
                "diary.update",
                self.write_options("Entry updated."),
            )
            .await
    }

    /// Delete a journal entry
    pub async fn delete_diary(&self, id: &str) -> Result<(), ExecError> {
        let store = Arc::clone(&self.store);
        let id = id.to_string();
        self.executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    let id = id.clone();
                    async move { store.delete_document(DIARY_COLLECTION, &id).await }
                },
                "diary.delete",
                self.write_options("Entry deleted."),
            )
            .await
    }

    // === Place reviews ===

    /// Create a place review; returns the stored record with its id
    pub async fn create_restaurant(
        &self,
        draft: RestaurantDraft,
    ) -> Result<Restaurant, ExecError> {
        let record = Restaurant {
            id: String::new(),
            name: draft.name,
            review: draft.review,
            rating: draft.rating,
            lat: draft.lat,
            lng: draft.lng,
            detail: draft.detail,
            created_at: Utc::now(),
        };
        let store = Arc::clone(&self.store);
        let fields_source = record.clone();
        let id = self
            .executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    let record = fields_source.clone();
                    async move {
                        let fields = to_fields(&record)?;
                        store.create_document(RESTAURANT_COLLECTION, fields).await
                    }
                },
                "restaurants.create",
                self.write_options("Restaurant saved."),
            )
            .await?;
        Ok(Restaurant { id, ..record })
    }

    /// All place reviews, newest first
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ExecError> {
        let store = Arc::clone(&self.store);
        let mut records = self
            .executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    async move {
                        let docs = store.list_documents(RESTAURANT_COLLECTION).await?;
                        docs.into_iter()
                            .map(from_document::<Restaurant>)
                            .collect::<Result<Vec<_>, _>>()
                    }
                },
                "restaurants.list",
                self.defaults.clone(),
            )
            .await?;
        records.sort_by_key(|r| std::cmp::Reverse(r.created_at));
        Ok(records)
    }

    /// Replace the editable fields of an existing review
    pub async fn update_restaurant(
        &self,
        id: &str,
        draft: RestaurantDraft,
    ) -> Result<(), ExecError> {
        let store = Arc::clone(&self.store);
        let id = id.to_string();
        self.executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    let id = id.clone();
                    let draft = draft.clone();
                    async move {
                        let mut fields = to_fields(&draft)?;
                        // Explicit null clears a previously stored detail
                        if draft.detail.is_none() {
                            fields.insert("detail".to_string(), json!(null));
                        }
                        store
                            .update_document(RESTAURANT_COLLECTION, &id, fields)
                            .await
                    }
                },
                "restaurants.update",
                self.write_options("Restaurant updated."),
            )
            .await
    }

    /// Delete a place review
    pub async fn delete_restaurant(&self, id: &str) -> Result<(), ExecError> {
        let store = Arc::clone(&self.store);
        let id = id.to_string();
        self.executor
            .execute(
                move || {
                    let store = Arc::clone(&store);
                    let id = id.clone();
                    async move { store.delete_document(RESTAURANT_COLLECTION, &id).await }
                },
                "restaurants.delete",
                self.write_options("Restaurant deleted."),
            )
            .await
    }
}
