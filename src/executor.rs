//! Resilient Executor
//!
//! Wraps an asynchronous unit of work with a bounded retry policy, a shared
//! in-flight counter backing the loading indicator, and structured outcome
//! reporting. Retry eligibility is decided by an injectable classifier;
//! terminal outcomes are handed to an [`OutcomeReporter`] which translates
//! them into notifications and error-log entries.
//!
//! Within one `execute` call attempts are strictly sequential. Across calls
//! there is no mutual exclusion: any number of operations may be in flight,
//! and the loading indicator stays up until the last tracked one finishes.
//! There is no cancellation and no per-attempt timeout; a unit of work that
//! never resolves holds its in-flight slot indefinitely.

use crate::diagnostics::ErrorLog;
use crate::error::{ErrorCode, ExecError, StoreError};
use crate::notify::NotificationQueue;
use crate::types::ErrorId;
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, warn};

const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed.";
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Retry eligibility of a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Retryable,
    Terminal,
}

/// Injectable retry classifier
pub type Classifier = Arc<dyn Fn(&StoreError) -> Disposition + Send + Sync>;

/// Default classification: transient availability and network failures are
/// retryable, everything else is terminal.
pub fn default_classifier(error: &StoreError) -> Disposition {
    match error.code() {
        ErrorCode::Unavailable | ErrorCode::NetworkRequestFailed => Disposition::Retryable,
        _ => Disposition::Terminal,
    }
}

/// Per-call behavior options
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Track this call in the shared loading indicator
    pub show_loading: bool,
    /// Push a success notification on terminal success
    pub show_success_toast: bool,
    /// Success notification text (generic default when unset)
    pub success_message: Option<String>,
    /// Maximum extra attempts after the first failure
    pub retry_count: usize,
    /// Base backoff delay; attempt `n` waits `retry_delay * n`
    pub retry_delay: Duration,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            show_loading: true,
            show_success_toast: false,
            success_message: None,
            retry_count: 0,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl ExecOptions {
    /// Defaults for document-store calls: two extra attempts with the
    /// base delay.
    pub fn store_defaults() -> Self {
        Self {
            retry_count: 2,
            ..Self::default()
        }
    }

    pub fn with_success_toast(mut self, message: impl Into<String>) -> Self {
        self.show_success_toast = true;
        self.success_message = Some(message.into());
        self
    }

    /// Wait before retry attempt `attempt` (1-based): `retry_delay * attempt`
    pub fn backoff_delay(&self, attempt: usize) -> Duration {
        self.retry_delay * attempt as u32
    }
}

/// Terminal result of one `execute` call, as seen by reporters
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub context: String,
    pub attempts: usize,
    pub duration_ms: u128,
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        toast: Option<String>,
    },
    Failure {
        code: ErrorCode,
        message: String,
    },
}

/// Translates terminal outcomes into user-facing effects.
///
/// Implementations must return the error-log id for failure outcomes so the
/// caller can correlate the returned error with the log entry.
pub trait OutcomeReporter: Send + Sync {
    fn report(&self, outcome: &Outcome) -> Option<ErrorId>;
}

/// Default reporter: success toasts go to the notification queue, failures
/// are recorded in the error log (which pushes its own error notification).
pub struct ToastReporter {
    notifications: Arc<NotificationQueue>,
    log: Arc<ErrorLog>,
}

impl ToastReporter {
    pub fn new(notifications: Arc<NotificationQueue>, log: Arc<ErrorLog>) -> Self {
        Self { notifications, log }
    }
}

impl OutcomeReporter for ToastReporter {
    fn report(&self, outcome: &Outcome) -> Option<ErrorId> {
        match &outcome.status {
            OutcomeStatus::Success { toast } => {
                if let Some(message) = toast {
                    self.notifications.success(message.clone());
                }
                None
            }
            OutcomeStatus::Failure { code, message } => {
                Some(self.log.record(*code, message.clone(), outcome.context.clone()))
            }
        }
    }
}

/// Resilient asynchronous operation executor.
///
/// Holds the in-flight counter backing the loading indicator; the counter is
/// scoped to this object, so consumers share loading state exactly as far as
/// they share the executor.
pub struct Executor {
    reporter: Arc<dyn OutcomeReporter>,
    classify: Classifier,
    in_flight: AtomicUsize,
}

impl Executor {
    /// Executor with the default reporter and classifier
    pub fn new(notifications: Arc<NotificationQueue>, log: Arc<ErrorLog>) -> Self {
        Self::with_parts(
            Arc::new(ToastReporter::new(notifications, log)),
            Arc::new(default_classifier),
        )
    }

    /// Executor with a custom reporter and classifier
    pub fn with_parts(reporter: Arc<dyn OutcomeReporter>, classify: Classifier) -> Self {
        Self {
            reporter,
            classify,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// True while at least one tracked operation is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Run a unit of work with retries.
    ///
    /// The work closure is invoked up to `retry_count + 1` times; it must be
    /// safe to call more than once when its failures are retryable (caller
    /// obligation, not enforced here). Attempt `n` is preceded by a wait of
    /// `retry_delay * n` (linear backoff). Non-retryable failures terminate
    /// after the attempt that produced them.
    ///
    /// Terminal failure is never swallowed: it is reported (producing an
    /// error-log entry and notification) and returned as [`ExecError`]
    /// carrying the log id.
    pub async fn execute<T, F, Fut>(
        &self,
        mut work: F,
        context: &str,
        options: ExecOptions,
    ) -> Result<T, ExecError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        if options.show_loading {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
        }
        let started = Instant::now();
        let mut attempt: usize = 0;

        let terminal = loop {
            match work().await {
                Ok(value) => {
                    if options.show_loading {
                        self.in_flight.fetch_sub(1, Ordering::SeqCst);
                    }
                    let toast = if options.show_success_toast {
                        Some(
                            options
                                .success_message
                                .clone()
                                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                        )
                    } else {
                        None
                    };
                    self.reporter.report(&Outcome {
                        context: context.to_string(),
                        attempts: attempt + 1,
                        duration_ms: started.elapsed().as_millis(),
                        status: OutcomeStatus::Success { toast },
                    });
                    debug!(
                        context = %context,
                        attempts = attempt + 1,
                        duration_ms = started.elapsed().as_millis() as u64,
                        "Operation completed"
                    );
                    return Ok(value);
                }
                Err(err) => {
                    let retryable = matches!((self.classify)(&err), Disposition::Retryable);
                    if retryable && attempt < options.retry_count {
                        attempt += 1;
                        let delay = options.backoff_delay(attempt);
                        warn!(
                            context = %context,
                            attempt,
                            max_attempts = options.retry_count + 1,
                            delay_ms = delay.as_millis() as u64,
                            code = %err.code(),
                            "Transient failure, retrying"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    break err;
                }
            }
        };

        if options.show_loading {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }

        let code = terminal.code();
        let message = terminal.to_string();
        let outcome = Outcome {
            context: context.to_string(),
            attempts: attempt + 1,
            duration_ms: started.elapsed().as_millis(),
            status: OutcomeStatus::Failure {
                code,
                message: message.clone(),
            },
        };
        // A reporter that skips logging still yields a unique correlation token
        let log_id = self.reporter.report(&outcome).unwrap_or_else(ErrorId::next);

        Err(ExecError {
            code,
            message,
            context: context.to_string(),
            log_id,
        })
    }
}
