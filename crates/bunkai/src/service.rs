// crates/bunkai/src/service.rs

//! BunkaiService: bunkai クレートの統合ファサード。
//!
//! - 接辞解析 (AffixAnalyzer)
//! - 単語帳の永続化 (WordStore)
//!
//! HTTP API などの外部からは、この構造体だけを意識すればよい。
//!
//! # 一覧の上限
//!
//! 一覧取得の件数は設定の `default_limit` / `max_limit` で制御する。
//! 呼び出し側が件数を指定しない場合は `default_limit`、
//! 指定した場合でも `max_limit` を超えることはない。

use crate::analyzer::AffixAnalyzer;
use crate::config::BunkaiConfig;
use crate::errors::error_definition::{BunkaiError, BunkaiResult};
use crate::models::{Word, WordAnalysis, WordPage};
use crate::store::WordStore;

/// bunkai クレートの統合ファサード。
///
/// 接辞解析と単語帳操作の全機能にこの構造体を通じてアクセスする。
#[derive(Debug, Clone)]
pub struct BunkaiService {
  /// 接辞解析器（静的テーブル参照のみを保持）
  analyzer: AffixAnalyzer,

  /// 単語帳ストア
  store: WordStore,

  /// 一覧取得のデフォルト件数
  default_list_limit: usize,

  /// 一覧取得の最大件数
  max_list_limit: usize,
}

impl BunkaiService {
  /// 初期化（設定検証 + 単語帳ストアの open）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. 設定のパス（未指定時は OS 既定のデータディレクトリ）で WordStore を開く
  ///
  /// # エラー
  /// - 設定が不正（default_limit が 0、max_limit < default_limit 等）
  /// - データディレクトリの作成失敗
  pub fn init(config: &BunkaiConfig) -> BunkaiResult<Self> {
    // 設定の妥当性を検証（ConfigError は #[from] で BunkaiError に自動変換）
    config.validate()?;

    let store = match config.data_file() {
      Some(path) => WordStore::open(path)?,
      None => WordStore::open_default()?,
    };

    Ok(Self {
      analyzer: AffixAnalyzer::new(),
      store,
      default_list_limit: config.default_list_limit(),
      max_list_limit: config.max_list_limit(),
    })
  }

  /// 単語を接頭辞・語根・接尾辞に分解する。
  ///
  /// 正規化後 3 文字未満の入力のみ `None` を返す。
  /// それ以外は必ず解析結果を返す（テーブルに一致がなくても分解列は埋まる）。
  #[must_use]
  pub fn analyze(&self, word: &str) -> Option<WordAnalysis> {
    self.analyzer.analyze(word)
  }

  /// 単語を単語帳に登録する。
  ///
  /// # 引数
  /// - `text`: 登録する単語（前後の空白は除去される）
  /// - `page_url`: 収集元ページの URL（空文字列でよい）
  /// - `created_at`: 作成時刻。`None` の場合はストア側で現在時刻を付与
  ///
  /// # エラー
  /// - `text` が空白のみ（EmptyWordText）
  /// - 単語帳ファイルの読み書き失敗
  pub fn register_word(
    &self,
    text: &str,
    page_url: &str,
    created_at: Option<String>,
  ) -> BunkaiResult<Word> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
      return Err(BunkaiError::EmptyWordText);
    }

    Ok(self.store.add(trimmed.to_string(), page_url.to_string(), created_at)?)
  }

  /// 単語帳の 1 ページ分を取得する。
  ///
  /// # 引数
  /// - `skip`: 先頭（新しい順）から読み飛ばす件数
  /// - `limit`: 取得件数。`None` の場合はデフォルト件数。
  ///   いずれの場合も最大件数でキャップされる
  pub fn list_words(&self, skip: usize, limit: Option<usize>) -> BunkaiResult<WordPage> {
    let limit = limit.unwrap_or(self.default_list_limit).min(self.max_list_limit);

    Ok(self.store.page(skip, limit)?)
  }

  /// 指定 id の単語を単語帳から削除し、削除した単語を返す。
  ///
  /// # エラー
  /// - 指定 id の単語が存在しない（WordNotFound）
  /// - 単語帳ファイルの読み書き失敗
  pub fn delete_word(&self, id: u64) -> BunkaiResult<Word> {
    Ok(self.store.remove(id)?)
  }

  /// 単語帳を空にし、削除した件数を返す。
  pub fn clear_words(&self) -> BunkaiResult<usize> {
    Ok(self.store.clear()?)
  }

  /// 単語帳の総件数を返す。
  pub fn word_count(&self) -> BunkaiResult<usize> {
    Ok(self.store.count()?)
  }

  // ===== アクセサ =====

  /// 単語帳ファイルのパスを返す。
  #[must_use]
  pub fn data_file(&self) -> &std::path::Path {
    self.store.data_file()
  }

  /// 一覧取得のデフォルト件数を返す。
  #[must_use]
  pub fn default_list_limit(&self) -> usize {
    self.default_list_limit
  }

  /// 一覧取得の最大件数を返す。
  #[must_use]
  pub fn max_list_limit(&self) -> usize {
    self.max_list_limit
  }

  /// 内部の WordStore への参照を返す。
  #[must_use]
  pub fn store(&self) -> &WordStore {
    &self.store
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{ListConfig, LogLevel, LoggingConfig, StoreConfig};
  use crate::errors::error_definition::StoreError;

  // ─── テスト用ヘルパー関数 ───────────────────────────────────────────────────

  /// テスト用の BunkaiConfig を作成
  fn create_config(temp_dir: &tempfile::TempDir) -> BunkaiConfig {
    BunkaiConfig {
      store: StoreConfig {
        data_file: Some(temp_dir.path().join("words.json")),
      },
      list: ListConfig {
        default_limit: 50,
        max_limit: 200,
      },
      logging: LoggingConfig {
        level: LogLevel::Info,
      },
    }
  }

  /// テスト用の BunkaiService を作成
  fn create_service() -> (tempfile::TempDir, BunkaiService) {
    let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリ作成失敗");
    let config = create_config(&temp_dir);
    let service = BunkaiService::init(&config).expect("BunkaiService 初期化失敗");
    (temp_dir, service)
  }

  // ─── 初期化テスト ──────────────────────────────────────────────────────────

  #[test]
  fn service_initializes_with_valid_config() {
    let (_temp_dir, service) = create_service();

    assert_eq!(service.default_list_limit(), 50);
    assert_eq!(service.max_list_limit(), 200);
    assert!(service.data_file().ends_with("words.json"));
  }

  #[test]
  fn service_init_validates_config() {
    let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリ作成失敗");

    // 無効な設定: default_limit が 0
    let mut config = create_config(&temp_dir);
    config.list.default_limit = 0;

    let result = BunkaiService::init(&config);
    assert!(result.is_err());
  }

  // ─── 解析テスト ────────────────────────────────────────────────────────────

  #[test]
  fn service_analyze_decomposes_word() {
    let (_temp_dir, service) = create_service();

    let analysis = service.analyze("impossible").expect("解析失敗");
    assert_eq!(analysis.prefix.map(|e| e.form), Some("in-"));
    assert_eq!(analysis.breakdown, vec!["im", "poss", "ible"]);
  }

  #[test]
  fn service_analyze_returns_none_for_short_input() {
    let (_temp_dir, service) = create_service();

    assert!(service.analyze("ab").is_none());
  }

  // ─── 登録テスト ────────────────────────────────────────────────────────────

  #[test]
  fn service_register_word_trims_text() {
    let (_temp_dir, service) = create_service();

    let word = service.register_word("  hello  ", "", None).expect("登録失敗");
    assert_eq!(word.text, "hello");
    assert_eq!(word.id, 1);
  }

  #[test]
  fn service_register_word_rejects_blank_text() {
    let (_temp_dir, service) = create_service();

    let err = service.register_word("   ", "", None).unwrap_err();
    assert!(matches!(err, BunkaiError::EmptyWordText));
  }

  #[test]
  fn service_register_word_keeps_page_url_and_timestamp() {
    let (_temp_dir, service) = create_service();

    let word = service
      .register_word(
        "hello",
        "https://example.com/page",
        Some("2024-03-01T12:00:00Z".to_string()),
      )
      .expect("登録失敗");

    assert_eq!(word.page_url, "https://example.com/page");
    assert_eq!(word.created_at, "2024-03-01T12:00:00Z");
  }

  // ─── 一覧テスト ────────────────────────────────────────────────────────────

  #[test]
  fn service_list_words_returns_newest_first() {
    let (_temp_dir, service) = create_service();

    service.register_word("first", "", None).expect("登録失敗");
    service.register_word("second", "", None).expect("登録失敗");

    let page = service.list_words(0, None).expect("一覧取得失敗");
    assert_eq!(page.total, 2);
    assert_eq!(page.words[0].text, "second");
    assert_eq!(page.words[1].text, "first");
  }

  #[test]
  fn service_list_words_applies_default_limit() {
    let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリ作成失敗");
    let mut config = create_config(&temp_dir);
    config.list.default_limit = 2;
    config.list.max_limit = 3;
    let service = BunkaiService::init(&config).expect("BunkaiService 初期化失敗");

    for text in ["a", "b", "c", "d", "e"] {
      service.register_word(text, "", None).expect("登録失敗");
    }

    // limit 未指定時は default_limit が適用される
    let page = service.list_words(0, None).expect("一覧取得失敗");
    assert_eq!(page.words.len(), 2);
    assert_eq!(page.total, 5);
  }

  #[test]
  fn service_list_words_caps_limit_at_max() {
    let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリ作成失敗");
    let mut config = create_config(&temp_dir);
    config.list.default_limit = 2;
    config.list.max_limit = 3;
    let service = BunkaiService::init(&config).expect("BunkaiService 初期化失敗");

    for text in ["a", "b", "c", "d", "e"] {
      service.register_word(text, "", None).expect("登録失敗");
    }

    // max_limit を超える指定はキャップされる
    let page = service.list_words(0, Some(10)).expect("一覧取得失敗");
    assert_eq!(page.words.len(), 3);
    assert_eq!(page.total, 5);
  }

  #[test]
  fn service_list_words_skips_entries() {
    let (_temp_dir, service) = create_service();

    for text in ["a", "b", "c"] {
      service.register_word(text, "", None).expect("登録失敗");
    }

    // 新しい順 (c, b, a) の先頭 1 件を読み飛ばす
    let page = service.list_words(1, None).expect("一覧取得失敗");
    assert_eq!(page.words[0].text, "b");
  }

  // ─── 削除テスト ────────────────────────────────────────────────────────────

  #[test]
  fn service_delete_word_removes_entry() {
    let (_temp_dir, service) = create_service();

    let word = service.register_word("hello", "", None).expect("登録失敗");
    let deleted = service.delete_word(word.id).expect("削除失敗");

    assert_eq!(deleted.text, "hello");
    assert_eq!(service.word_count().expect("件数取得失敗"), 0);
  }

  #[test]
  fn service_delete_word_reports_missing_id() {
    let (_temp_dir, service) = create_service();

    let err = service.delete_word(42).unwrap_err();
    assert!(matches!(
      err,
      BunkaiError::Store(StoreError::WordNotFound { id: 42 })
    ));
  }

  #[test]
  fn service_clear_words_empties_list() {
    let (_temp_dir, service) = create_service();

    service.register_word("a", "", None).expect("登録失敗");
    service.register_word("b", "", None).expect("登録失敗");

    assert_eq!(service.clear_words().expect("全削除失敗"), 2);
    assert_eq!(service.word_count().expect("件数取得失敗"), 0);
  }

  // ─── 統合テスト（登録→再初期化→一覧）──────────────────────────────────────

  #[test]
  fn service_full_workflow_register_and_reload() {
    // このテストでは、登録後に新しい BunkaiService を作成して
    // 単語帳が正しく永続化されていることを確認

    let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリ作成失敗");
    let config = create_config(&temp_dir);

    // 1. 最初のサービスで単語を登録
    {
      let service = BunkaiService::init(&config).expect("初期化失敗");
      service
        .register_word("impossible", "https://example.com", None)
        .expect("登録失敗");
    }

    // 2. 新しいサービスを作成して一覧を確認
    {
      let service = BunkaiService::init(&config).expect("初期化失敗");
      let page = service.list_words(0, None).expect("一覧取得失敗");

      assert_eq!(page.total, 1);
      assert_eq!(page.words[0].text, "impossible");
      assert_eq!(page.words[0].page_url, "https://example.com");
    }
  }
}
