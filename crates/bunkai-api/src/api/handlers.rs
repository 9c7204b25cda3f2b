//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{
  AnalyzeRequest, AnalyzeResponse, CreateWordRequest, ListWordsQuery, WordDto, WordListResponse,
};

use super::state::AppState;

/// GET /api/words エンドポイント
///
/// 保存済みの単語一覧を新しい順で返す。
///
/// # Query Parameters
/// - `skip`: 先頭から読み飛ばす件数（省略時 0）
/// - `limit`: 取得する最大件数（省略時はサーバー既定値）
///
/// # Response
/// - 200 OK: 取得成功
/// - 500 Internal Server Error: 単語帳ファイルの読み込み失敗
pub async fn get_words(
  State(state): State<AppState>,
  Query(query): Query<ListWordsQuery>,
) -> Result<Json<WordListResponse>, ApiError> {
  debug!(skip = query.skip, limit = ?query.limit, "単語一覧リクエストを受信");

  // ファイル I/O を spawn_blocking で実行
  // 非同期ランタイムをブロックしないよう分離する
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.list_words(query)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    count = response.words.len(),
    total = response.total,
    "単語一覧取得完了"
  );

  Ok(Json(response))
}

/// POST /api/words エンドポイント
///
/// 単語を 1 件登録する。
///
/// # Request Body
/// ```json
/// { "text": "impossible", "pageUrl": "https://example.com", "createdAt": "2026-03-01T00:00:00.000Z" }
/// ```
/// `pageUrl` と `createdAt` は省略可能。`createdAt` 省略時はサーバー側で付与する。
///
/// # Response
/// - 201 Created: 登録成功（ID 付きレコードを返す）
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: 単語帳ファイルの書き込み失敗
pub async fn post_word(
  State(state): State<AppState>,
  Json(request): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<WordDto>), ApiError> {
  debug!(text_len = request.text.len(), "単語登録リクエストを受信");

  let service = state.service.clone();

  let word =
    tokio::task::spawn_blocking(move || service.create_word(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(id = word.id, "単語登録完了");

  Ok((StatusCode::CREATED, Json(word)))
}

/// DELETE /api/words/{id} エンドポイント
///
/// 指定した ID の単語を削除する。
///
/// # Response
/// - 204 No Content: 削除成功
/// - 404 Not Found: 指定 ID の単語が存在しない
/// - 500 Internal Server Error: 単語帳ファイルの書き込み失敗
pub async fn delete_word(
  State(state): State<AppState>,
  Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
  debug!(id, "単語削除リクエストを受信");

  let service = state.service.clone();

  tokio::task::spawn_blocking(move || service.delete_word(id)).await.map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })??;

  info!(id, "単語削除完了");

  Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/words エンドポイント
///
/// 保存済みの単語をすべて削除する。
///
/// # Response
/// - 204 No Content: 削除成功
/// - 500 Internal Server Error: 単語帳ファイルの書き込み失敗
pub async fn delete_all_words(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
  debug!("全単語削除リクエストを受信");

  let service = state.service.clone();

  tokio::task::spawn_blocking(move || service.delete_all_words()).await.map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })??;

  info!("全単語削除完了");

  Ok(StatusCode::NO_CONTENT)
}

/// POST /api/analyze エンドポイント
///
/// 英単語の接辞解析を実行する。
///
/// # Request Body
/// ```json
/// { "word": "impossible" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功（短すぎる入力は `analysis: null`）
/// - 400 Bad Request: テキスト長超過
/// - 500 Internal Server Error: 内部エラー
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(word_len = request.word.len(), "接辞解析リクエストを受信");

  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    matched = response.analysis.is_some(),
    elapsed_ms = response.elapsed_ms,
    "接辞解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
