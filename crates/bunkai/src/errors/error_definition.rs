//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定ファイル（BunkaiConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// list.default_limit < 1
  #[error("list.default_limit は 1 以上である必要があります: actual={actual}")]
  InvalidListDefaultLimit {
    /// 実際に指定された値
    actual: usize,
  },

  /// list.max_limit < list.default_limit
  #[error(
    "list.max_limit は list.default_limit 以上である必要があります: \
     default_limit={default_limit}, max_limit={max_limit}"
  )]
  InvalidListMaxLimit {
    /// list.default_limit
    default_limit: usize,
    /// list.max_limit
    max_limit: usize,
  },

  /// store.data_file がファイルではなくディレクトリを指している
  #[error("store.data_file がディレクトリを指しています: path={path:?}")]
  DataFileIsDirectory {
    /// 不正なパス
    path: PathBuf,
  },

  /// store.data_file の親ディレクトリの作成に失敗
  #[error("データディレクトリの作成に失敗しました: path={path:?}, error={source}")]
  DataDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 単語帳ストア関連のエラー
/// JSON ファイルの読み書きと単語の検索に関するエラーを定義する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum StoreError {
  /// 既定のデータ保存先ディレクトリーが見つからない
  #[error("単語帳データの保存先ディレクトリーが見つかりません")]
  DataDirNotFound,

  /// データディレクトリーの作成失敗
  #[error("データディレクトリーの作成に失敗しました: path={path:?}, error={source}")]
  DirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 単語帳ファイルの読み込み失敗
  #[error("単語帳ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 対象ファイル
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 単語帳ファイルの書き込み失敗
  #[error("単語帳ファイルの書き込みに失敗しました: path={path:?}, error={source}")]
  Write {
    /// 対象ファイル
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 単語帳ファイルの JSON が壊れている（サイレントに空リストへ初期化しない）
  #[error("単語帳ファイルの解析に失敗しました: path={path:?}, error={source}")]
  Corrupted {
    /// 対象ファイル
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 単語リストの JSON シリアライズ失敗
  #[error("単語帳のシリアライズに失敗しました: {source}")]
  Serialize {
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// 指定された ID の単語が存在しない
  #[error("指定された単語が見つかりません: id={id}")]
  WordNotFound {
    /// 見つからなかった単語 ID
    id: u64,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `BunkaiResult<T>` = `Result<T, BunkaiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BunkaiError {
  /// ストア関連エラー
  #[error(transparent)]
  Store(#[from] StoreError),

  /// 登録対象の単語テキストが空（トリム後）
  #[error("登録する単語が空です")]
  EmptyWordText,

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// bunkai クレートの標準 Result 型エイリアス
pub type BunkaiResult<T> = Result<T, BunkaiError>;
