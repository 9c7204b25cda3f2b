//! リクエストモデル定義

use serde::Deserialize;

/// 単語登録リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordRequest {
  /// 登録する単語
  pub text: String,

  /// 収集元ページの URL（省略時は空文字列）
  #[serde(default)]
  pub page_url: String,

  /// 作成時刻（省略時はサーバー側で付与）
  #[serde(default)]
  pub created_at: Option<String>,
}

/// 単語一覧取得のクエリパラメータ
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListWordsQuery {
  /// 先頭から読み飛ばす件数
  #[serde(default)]
  pub skip: usize,

  /// 取得する最大件数（省略時はサーバー既定値）
  #[serde(default)]
  pub limit: Option<usize>,
}

/// 接辞解析リクエスト
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象の単語
  pub word: String,
}
