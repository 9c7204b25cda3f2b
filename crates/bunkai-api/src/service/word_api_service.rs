//! Word List and Affix Analysis Service

use std::time::Instant;

use bunkai::BunkaiService;
use bunkai::config::{BunkaiConfig, ListConfig, LogLevel, LoggingConfig, StoreConfig};

use crate::config::MAX_TEXT_LENGTH;
use crate::config::{Config, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crate::errors::{ApiError, Result};
use crate::models::{
  AnalysisDto, AnalyzeRequest, AnalyzeResponse, CreateWordRequest, ListWordsQuery, WordDto,
  WordListResponse,
};

/// Common interface for the word list and analysis service
///
/// This trait allows swapping production implementation (`WordApiServiceFull`) with
/// test stubs/mocks.
pub trait WordApiService: Send + Sync {
  /// Returns one page of stored words, newest first
  ///
  /// # Errors
  /// - If the word list file cannot be read
  fn list_words(&self, query: ListWordsQuery) -> Result<WordListResponse>;

  /// Saves a word
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  /// - If the word list file cannot be written
  fn create_word(&self, request: CreateWordRequest) -> Result<WordDto>;

  /// Deletes one word by id
  ///
  /// # Errors
  /// - If no word has the given id
  fn delete_word(&self, id: u64) -> Result<()>;

  /// Deletes every stored word
  ///
  /// # Errors
  /// - If the word list file cannot be written
  fn delete_all_words(&self) -> Result<()>;

  /// Executes affix analysis
  ///
  /// # Errors
  /// - If the word exceeds maximum length
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Converts the API server Config to the core BunkaiConfig
///
/// Conversion is done in the service layer so that the config layer does not depend on bunkai
#[must_use]
fn build_core_config(config: &Config) -> BunkaiConfig {
  BunkaiConfig {
    store: StoreConfig {
      data_file: config.words_file.clone(),
    },
    list: ListConfig {
      default_limit: DEFAULT_LIST_LIMIT,
      max_limit: MAX_LIST_LIMIT,
    },
    logging: LoggingConfig {
      level: LogLevel::Info,
    },
  }
}

/// Word List and Affix Analysis Service
///
/// Holds the core facade directly so every endpoint shares
/// one word store and one analyzer.
#[derive(Clone)]
pub struct WordApiServiceFull {
  /// Core service (storage and analysis implementation)
  inner: BunkaiService,
}

impl WordApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including the word list file path)
  ///
  /// # Errors
  /// Returns an error if the word store cannot be opened
  pub fn new(config: &Config) -> Result<Self> {
    let core_config = build_core_config(config);

    let inner = BunkaiService::init(&core_config)
      .map_err(|e| ApiError::config(format!("Failed to initialize word service: {}", e)))?;

    Ok(Self { inner })
  }

  /// Returns one page of stored words, newest first
  ///
  /// # Arguments
  /// * `query` - Pagination parameters (skip / limit)
  ///
  /// # Errors
  /// - If the word list file cannot be read
  pub fn list_words(&self, query: ListWordsQuery) -> Result<WordListResponse> {
    let page = self.inner.list_words(query.skip, query.limit)?;

    Ok(WordListResponse::from(page))
  }

  /// Saves a word
  ///
  /// # Arguments
  /// * `request` - The word to save and its collection context
  ///
  /// # Errors
  /// - If text is empty after trimming
  /// - If text exceeds maximum length
  /// - If the word list file cannot be written
  pub fn create_word(&self, request: CreateWordRequest) -> Result<WordDto> {
    // Validate text length
    let text_bytes = request.text.len();
    if request.text.trim().is_empty() {
      return Err(ApiError::invalid_input("Text is empty"));
    }

    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let word = self
      .inner
      .register_word(&request.text, &request.page_url, request.created_at)?;

    Ok(WordDto::from(word))
  }

  /// Deletes one word by id
  ///
  /// # Errors
  /// - If no word has the given id
  pub fn delete_word(&self, id: u64) -> Result<()> {
    self.inner.delete_word(id)?;

    Ok(())
  }

  /// Deletes every stored word
  ///
  /// # Errors
  /// - If the word list file cannot be written
  pub fn delete_all_words(&self) -> Result<()> {
    self.inner.clear_words()?;

    Ok(())
  }

  /// Executes affix analysis (returns the match result and processing time)
  ///
  /// Words too short to analyze produce `analysis: None` rather than an
  /// error, matching the lenient contract of the analyzer itself.
  ///
  /// # Errors
  /// - If the word exceeds maximum length
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Validate text length
    let word_bytes = request.word.len();
    if word_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(word_bytes, MAX_TEXT_LENGTH));
    }

    // Start measuring processing time
    let start = Instant::now();

    let analysis = self.inner.analyze(&request.word).map(AnalysisDto::from);

    // End measuring processing time
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(AnalyzeResponse {
      analysis,
      elapsed_ms,
    })
  }
}

/// Production implementation of trait `WordApiService`
impl WordApiService for WordApiServiceFull {
  fn list_words(&self, query: ListWordsQuery) -> Result<WordListResponse> {
    // Note: Writing `self.list_words(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    WordApiServiceFull::list_words(self, query)
  }

  fn create_word(&self, request: CreateWordRequest) -> Result<WordDto> {
    WordApiServiceFull::create_word(self, request)
  }

  fn delete_word(&self, id: u64) -> Result<()> {
    WordApiServiceFull::delete_word(self, id)
  }

  fn delete_all_words(&self) -> Result<()> {
    WordApiServiceFull::delete_all_words(self)
  }

  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    WordApiServiceFull::analyze(self, request)
  }
}
