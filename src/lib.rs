//! Daybook: resilient data-access core for a personal record-keeping app
//!
//! Journal entries and place reviews stored in a pluggable document store,
//! with every remote call wrapped in a resilient executor that retries
//! transient failures, tracks a shared loading indicator, and reports
//! terminal outcomes into an error log and a notification queue.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod logging;
pub mod notify;
pub mod records;
pub mod store;
pub mod types;

pub use api::RecordsApi;
pub use config::DaybookConfig;
pub use diagnostics::{ErrorLog, ErrorRecord};
pub use error::{ErrorCode, ExecError, StoreError};
pub use executor::{ExecOptions, Executor};
pub use notify::{Notification, NotificationQueue, Severity};
