//! Word List Persistence Module
//!
//! Stores the saved word list as a single JSON file, newest entry first.
//! Every operation reads the file fresh and mutations write it back whole,
//! so the file on disk is always the source of truth. A missing file is
//! treated as an empty list; a file that exists but does not parse is
//! surfaced as an error rather than silently discarded.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::errors::error_definition::StoreError;
use crate::models::{Word, WordPage};

/// File-backed word list store
#[derive(Debug, Clone)]
pub struct WordStore {
  /// Path of the JSON word list file
  data_file: PathBuf,
}

impl WordStore {
  /// Opens a store at the platform default location.
  ///
  /// | OS      | Example Path                                          |
  /// |---------|-------------------------------------------------------|
  /// | Linux   | `~/.local/share/bunkai/words.json`                    |
  /// | macOS   | `~/Library/Application Support/bunkai/words.json`     |
  /// | Windows | `C:\Users\{user}\AppData\Local\bunkai\words.json`     |
  pub fn open_default() -> Result<Self, StoreError> {
    let base = dirs::data_local_dir().ok_or(StoreError::DataDirNotFound)?;

    Self::open(base.join("bunkai").join("words.json"))
  }

  /// Opens a store over the given word list file.
  ///
  /// The file itself is created lazily on the first write, but missing
  /// parent directories are created here so that later writes cannot fail
  /// on a missing directory.
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
    let data_file = path.as_ref().to_path_buf();

    if let Some(parent) = data_file.parent() {
      std::fs::create_dir_all(parent).map_err(|e| StoreError::DirCreationFailed {
        path: parent.to_path_buf(),
        source: Arc::new(e),
      })?;
    }

    Ok(Self { data_file })
  }

  /// Returns the path of the word list file.
  #[must_use]
  pub fn data_file(&self) -> &Path {
    &self.data_file
  }

  /// Returns all saved words, newest first.
  pub fn list(&self) -> Result<Vec<Word>, StoreError> {
    self.load()
  }

  /// Returns one page of the word list together with the total count.
  ///
  /// `skip` entries are dropped from the front (newest first) and at most
  /// `limit` entries are returned. `total` always reflects the whole list,
  /// so callers can paginate past the current page.
  pub fn page(&self, skip: usize, limit: usize) -> Result<WordPage, StoreError> {
    let words = self.load()?;
    let total = words.len();

    Ok(WordPage {
      words: words.into_iter().skip(skip).take(limit).collect(),
      total,
    })
  }

  /// Returns the number of saved words.
  pub fn count(&self) -> Result<usize, StoreError> {
    Ok(self.load()?.len())
  }

  /// Saves a new word at the front of the list and returns it.
  ///
  /// The id is one past the highest id currently in the list, so removing
  /// an entry in the middle never makes a later insert collide with a
  /// surviving id. When `created_at` is `None` an RFC 3339 UTC timestamp
  /// is minted; a caller-supplied value is stored verbatim.
  pub fn add(
    &self,
    text: String,
    page_url: String,
    created_at: Option<String>,
  ) -> Result<Word, StoreError> {
    let mut words = self.load()?;

    let id = words.iter().map(|w| w.id).max().unwrap_or(0) + 1;
    let created_at = created_at
      .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    let word = Word {
      id,
      text,
      page_url,
      created_at,
    };

    // Newest first
    words.insert(0, word.clone());
    self.save(&words)?;

    info!(id = word.id, text = %word.text, "Word saved");

    Ok(word)
  }

  /// Removes the word with the given id and returns it.
  ///
  /// Returns [`StoreError::WordNotFound`] when no entry has that id.
  pub fn remove(&self, id: u64) -> Result<Word, StoreError> {
    let mut words = self.load()?;

    let index = words
      .iter()
      .position(|w| w.id == id)
      .ok_or(StoreError::WordNotFound { id })?;

    let word = words.remove(index);
    self.save(&words)?;

    info!(id, "Word removed");

    Ok(word)
  }

  /// Removes every saved word and returns how many were removed.
  pub fn clear(&self) -> Result<usize, StoreError> {
    let removed = self.load()?.len();

    self.save(&[])?;

    info!(removed, "Word list cleared");

    Ok(removed)
  }

  /// Reads the whole list from disk; a missing file is an empty list.
  fn load(&self) -> Result<Vec<Word>, StoreError> {
    if !self.data_file.exists() {
      return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(&self.data_file).map_err(|e| StoreError::Read {
      path: self.data_file.clone(),
      source: Arc::new(e),
    })?;

    let words: Vec<Word> = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupted {
      path: self.data_file.clone(),
      source: Arc::new(e),
    })?;

    debug!(path = %self.data_file.display(), count = words.len(), "Word list loaded");

    Ok(words)
  }

  /// Writes the whole list back to disk as pretty-printed JSON.
  fn save(&self, words: &[Word]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(words).map_err(|e| StoreError::Serialize {
      source: Arc::new(e),
    })?;

    std::fs::write(&self.data_file, json).map_err(|e| StoreError::Write {
      path: self.data_file.clone(),
      source: Arc::new(e),
    })?;

    debug!(path = %self.data_file.display(), count = words.len(), "Word list written");

    Ok(())
  }
}
