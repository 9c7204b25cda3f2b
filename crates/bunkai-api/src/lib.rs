//! bunkai-api crate
//!
//! Web server providing English affix analysis and a persistent word list
//! as HTTP API.
//!
//! ## Endpoints
//! - `GET /api/words` - List saved words (newest first)
//! - `POST /api/words` - Save a word
//! - `DELETE /api/words/{id}` - Delete one word
//! - `DELETE /api/words` - Delete every word
//! - `POST /api/analyze` - Affix Analysis
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/api/words \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "impossible", "pageUrl": "https://example.com/article"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{
  AnalyzeRequest, AnalyzeResponse, CreateWordRequest, ListWordsQuery, WordDto, WordListResponse,
};
pub use service::WordApiServiceFull;
