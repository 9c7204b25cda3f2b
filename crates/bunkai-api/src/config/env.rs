//! Config loading from environment variables

use std::path::PathBuf;

use super::constants::DEFAULT_BIND_ADDR;
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
  /// Word list storage file (platform default location when `None`)
  pub words_file: Option<PathBuf>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// * `BUNKAI_API_BASE_URL` - Bind address of the server
  /// * `BUNKAI_WORDS_FILE` - Path of the word list JSON file
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("BUNKAI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let words_file = match std::env::var("BUNKAI_WORDS_FILE") {
      Ok(value) if value.trim().is_empty() => {
        return Err(ApiError::config("BUNKAI_WORDS_FILE must not be empty"));
      }
      Ok(value) => Some(PathBuf::from(value)),
      Err(_) => None,
    };

    Ok(Self {
      bind_addr,
      words_file,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_from_env_defaults() {
    // Verify default values when environment variables are not set
    // Note: remove_var became unsafe in Rust 2024, so not used here
    // This test assumes environment variables are not set

    let config = Config::from_env().unwrap();
    // If environment variable is set, it's that value, otherwise default value
    assert!(!config.bind_addr.is_empty());
  }
}
