//! Domain records: journal entries and place reviews.
//!
//! Records are stored as schemaless field maps; the document id lives on the
//! store key, not in the fields, and is attached when a document is read
//! back.

use crate::error::StoreError;
use crate::store::{Document, Fields};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Collection name for journal entries
pub const DIARY_COLLECTION: &str = "diary";
/// Collection name for place reviews
pub const RESTAURANT_COLLECTION: &str = "restaurants";

/// Star rating, clamped to 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Self {
        Rating(value.clamp(1, 5))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Fields of a new journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryDraft {
    pub date: NaiveDate,
    pub content: String,
}

/// A stored journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    #[serde(skip)]
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a new place review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDraft {
    pub name: String,
    pub review: String,
    pub rating: Rating,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A stored place review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub review: String,
    pub rating: Rating,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Serialize a record into a document field map
pub(crate) fn to_fields<T: Serialize>(record: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::InvalidData(
            "record must serialize to an object".to_string(),
        )),
    }
}

/// Deserialize a record from a document, attaching the document id
pub(crate) fn from_document<T>(document: Document) -> Result<T, StoreError>
where
    T: DeserializeOwned + WithId,
{
    let mut record: T = serde_json::from_value(Value::Object(document.fields))?;
    record.set_id(document.id);
    Ok(record)
}

/// Records whose id lives on the store key rather than in the fields
pub(crate) trait WithId {
    fn set_id(&mut self, id: String);
}

impl WithId for DiaryEntry {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl WithId for Restaurant {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
