//! Core identifier types shared across the crate.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque token identifying a logged error record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorId(u64);

impl ErrorId {
    /// Generate the next error id (monotonic, process-wide)
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        ErrorId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Opaque token identifying a queued notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Generate the next notification id (monotonic, process-wide)
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        NotificationId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}
