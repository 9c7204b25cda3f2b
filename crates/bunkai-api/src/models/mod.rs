//! モデルモジュール

mod request;
mod response;

pub use request::{AnalyzeRequest, CreateWordRequest, ListWordsQuery};
pub use response::{AffixDto, AnalysisDto, AnalyzeResponse, WordDto, WordListResponse};
