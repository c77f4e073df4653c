//! Notification Queue
//!
//! Ordered collection of transient user-facing messages. The queue owns
//! insertion and dismissal; expiry after the display window belongs to the
//! rendering layer, which is expected to call [`NotificationQueue::dismiss`]
//! once the window elapses.

use crate::types::NotificationId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default display window a renderer should honor before dismissing
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Severity tag for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient user-facing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Ordered queue of notifications.
///
/// Display order is insertion order. No deduplication: two identical
/// messages produce two independent entries.
pub struct NotificationQueue {
    entries: RwLock<Vec<Notification>>,
    display_duration: Duration,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_display_duration(DEFAULT_DISPLAY_DURATION)
    }

    pub fn with_display_duration(display_duration: Duration) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            display_duration,
        }
    }

    /// Append a notification and return its id
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId::next();
        self.entries.write().push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Warning)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Info)
    }

    /// Remove a notification by id. No-op if the id is absent (already
    /// expired or dismissed).
    pub fn dismiss(&self, id: NotificationId) {
        self.entries.write().retain(|n| n.id != id);
    }

    /// Snapshot of the queue in display order
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Display window the rendering layer should honor
    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}
