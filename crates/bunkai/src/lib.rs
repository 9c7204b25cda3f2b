//! bunkai 接辞解析ライブラリー
//!
//! 英単語を接頭辞・語根・接尾辞に分解し、単語帳の管理を行う

/// 解析モジュール - AffixAnalyzer による接辞分解機能を提供
pub mod analyzer;

/// 設定モジュール - BunkaiConfig, LogLevel等の設定構造体を定義
pub mod config;

/// エラーモジュール - BunkaiError, BunkaiResult等のエラー型を定義
pub mod errors;

/// 語彙モジュール - 接頭辞・語根・接尾辞の静的テーブルを定義
pub mod lexicon;

/// データモデルモジュール - Word, WordAnalysis等のデータ構造を定義
pub mod models;

/// サービスモジュール - BunkaiService等の上位レベルAPIを提供
pub mod service;

/// ストアモジュール - JSONファイルによる単語帳の永続化を提供
pub mod store;

/// 再エクスポート
pub use analyzer::AffixAnalyzer;
pub use config::BunkaiConfig;
pub use errors::{BunkaiError, BunkaiResult};
pub use service::BunkaiService;
