//! Error Log
//!
//! Append/remove store of terminal-failure records, kept for diagnostics
//! independently of notification display. Recording a failure always pushes
//! an error notification with a user-facing message selected by code; the
//! record itself never auto-expires and is removed only by explicit caller
//! action.

use crate::error::ErrorCode;
use crate::notify::NotificationQueue;
use crate::types::ErrorId;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

const FALLBACK_MESSAGE: &str = "An unknown error occurred.";

/// A logged, addressable description of a terminal failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub id: ErrorId,
    pub message: String,
    pub context: String,
    pub timestamp: DateTime<Utc>,
    pub code: ErrorCode,
}

/// Diagnostic log of terminal failures
pub struct ErrorLog {
    records: RwLock<Vec<ErrorRecord>>,
    notifications: Arc<NotificationQueue>,
}

impl ErrorLog {
    pub fn new(notifications: Arc<NotificationQueue>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            notifications,
        }
    }

    /// Record a terminal failure.
    ///
    /// Builds an [`ErrorRecord`] with a fresh id, enqueues an error-severity
    /// notification with a message selected by code, and returns the id.
    pub fn record(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> ErrorId {
        let message = message.into();
        let context = context.into();
        let message = if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        };

        let record = ErrorRecord {
            id: ErrorId::next(),
            message: message.clone(),
            context: context.clone(),
            timestamp: Utc::now(),
            code,
        };
        let id = record.id;

        self.notifications.error(user_facing_message(code, &message));
        self.records.write().push(record);

        error!(
            error_id = id.as_u64(),
            code = %code,
            context = %context,
            message = %message,
            "Recorded terminal failure"
        );

        id
    }

    /// Remove one record by id. No-op on unknown ids.
    pub fn remove(&self, id: ErrorId) {
        self.records.write().retain(|r| r.id != id);
    }

    /// Remove all records
    pub fn clear(&self) {
        self.records.write().clear();
    }

    /// Snapshot of the log in insertion order
    pub fn errors(&self) -> Vec<ErrorRecord> {
        self.records.read().clone()
    }

    pub fn has_errors(&self) -> bool {
        !self.records.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

/// Select the user-facing message for a failure code. Unclassified codes
/// fall back to the raw message.
fn user_facing_message(code: ErrorCode, message: &str) -> String {
    match code {
        ErrorCode::PermissionDenied => {
            "You do not have permission. Please sign in again.".to_string()
        }
        ErrorCode::NetworkRequestFailed => "Please check your network connection.".to_string(),
        ErrorCode::Unavailable => {
            "The server cannot be reached. Please try again later.".to_string()
        }
        ErrorCode::NotFound | ErrorCode::Unknown => message.to_string(),
    }
}
