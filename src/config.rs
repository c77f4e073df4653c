//! Configuration System
//!
//! Serde-default configuration with file and environment overrides.
//! Priority order (highest to lowest): `DAYBOOK_*` environment variables,
//! configuration file, defaults.

use crate::error::ConfigError;
use crate::executor::ExecOptions;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaybookConfig {
    /// Document store settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Executor retry defaults for store calls
    #[serde(default)]
    pub executor: ExecutorConfig,

    /// Notification display settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Document store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store path; defaults to the platform data directory
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured path, or `<data_dir>/daybook/store`
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        ProjectDirs::from("", "", "daybook")
            .map(|dirs| dirs.data_dir().join("store"))
            .unwrap_or_else(|| PathBuf::from(".daybook/store"))
    }
}

/// Executor retry defaults for store calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Extra attempts after the first failure
    #[serde(default = "default_retry_count")]
    pub retry_count: usize,

    /// Base backoff delay (milliseconds)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_retry_count() -> usize {
    2
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ExecutorConfig {
    /// Base options for store calls derived from this configuration
    pub fn store_options(&self) -> ExecOptions {
        ExecOptions {
            retry_count: self.retry_count,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            ..ExecOptions::default()
        }
    }
}

/// Notification display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Display window before a renderer dismisses a notification (milliseconds)
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

fn default_display_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

impl DaybookConfig {
    /// Load configuration from an optional file plus `DAYBOOK_*` environment
    /// overrides (e.g. `DAYBOOK_EXECUTOR__RETRY_COUNT=3`).
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("DAYBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: DaybookConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.executor.retry_delay_ms == 0 && self.executor.retry_count > 0 {
            return Err(ConfigError::Invalid(
                "executor.retry_delay_ms must be positive when retries are enabled".to_string(),
            ));
        }
        Ok(())
    }
}
