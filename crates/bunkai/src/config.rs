// crates/bunkai/src/config.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Top-level configuration for bunkai.
#[derive(Debug, Clone, Deserialize)]
pub struct BunkaiConfig {
  /// [store] section
  pub store: StoreConfig,
  /// [list] section
  pub list: ListConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [store] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
  /// Word list file path.
  ///
  /// If omitted, it becomes `None`, and the actual default is assumed to be
  /// determined by `WordStore` (platform data directory).
  #[serde(default)]
  pub data_file: Option<PathBuf>,
}

/// [list] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
  /// Default word list page size
  pub default_limit: usize,
  /// Maximum word list page size
  pub max_limit: usize,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the level as a lowercase string (used for log filter directives).
  ///
  /// # Examples
  /// - `LogLevel::Info` → `"info"`
  /// - `LogLevel::Debug` → `"debug"`
  #[must_use]
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// ===== Accessor Methods =====

impl BunkaiConfig {
  /// Returns the configured word list file path.
  ///
  /// `None` if unspecified.
  /// The actual path determination is assumed to be done on the `WordStore` side.
  #[must_use]
  pub fn data_file(&self) -> Option<&Path> {
    self.store.data_file.as_deref()
  }

  /// Returns the default word list page size.
  #[must_use]
  pub fn default_list_limit(&self) -> usize {
    self.list.default_limit
  }

  /// Returns the maximum word list page size.
  #[must_use]
  pub fn max_list_limit(&self) -> usize {
    self.list.max_limit
  }

  /// Returns the log level.
  #[must_use]
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `list.default_limit` >= 1
  /// - `list.max_limit` >= `list.default_limit`
  /// - `store.data_file` is not a directory, and its parent directory
  ///   exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // list.default_limit >= 1
    if self.list.default_limit < 1 {
      return Err(ConfigError::InvalidListDefaultLimit {
        actual: self.list.default_limit,
      });
    }

    // list.max_limit >= list.default_limit
    if self.list.max_limit < self.list.default_limit {
      return Err(ConfigError::InvalidListMaxLimit {
        default_limit: self.list.default_limit,
        max_limit: self.list.max_limit,
      });
    }

    // store.data_file points at a (possibly not yet existing) file
    if let Some(data_file) = &self.store.data_file {
      if data_file.is_dir() {
        return Err(ConfigError::DataFileIsDirectory {
          path: data_file.clone(),
        });
      }

      if let Some(parent) = data_file.parent() {
        // A bare file name has an empty parent; nothing to create then
        if !parent.as_os_str().is_empty() && !parent.exists() {
          if let Err(e) = std::fs::create_dir_all(parent) {
            return Err(ConfigError::DataDirCreationFailed {
              path: parent.to_path_buf(),
              source: Arc::new(e),
            });
          }
        }
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
