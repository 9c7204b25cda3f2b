//! ルーター定義

use axum::{
  Router,
  routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
  delete_all_words, delete_word, get_words, health_check, post_analyze, post_word,
};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route(
      "/api/words",
      get(get_words).post(post_word).delete(delete_all_words),
    )
    .route("/api/words/{id}", delete(delete_word))
    .route("/api/analyze", post(post_analyze))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    // ブラウザ拡張・フロントエンドからのクロスオリジン要求を許可する
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{
    AnalyzeRequest, AnalyzeResponse, CreateWordRequest, ListWordsQuery, WordDto, WordListResponse,
  };
  use crate::service::WordApiService;

  /// テスト用のダミー実装（ファイルを一切触らない）
  #[derive(Clone)]
  struct DummyService;

  impl WordApiService for DummyService {
    fn list_words(&self, _query: ListWordsQuery) -> ApiResult<WordListResponse> {
      Ok(WordListResponse {
        words: Vec::new(),
        total: 0,
      })
    }

    fn create_word(&self, request: CreateWordRequest) -> ApiResult<WordDto> {
      Ok(WordDto {
        id: 1,
        text: request.text,
        page_url: request.page_url,
        created_at: request.created_at.unwrap_or_default(),
      })
    }

    fn delete_word(&self, _id: u64) -> ApiResult<()> {
      Ok(())
    }

    fn delete_all_words(&self) -> ApiResult<()> {
      Ok(())
    }

    fn analyze(&self, _request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
      Ok(AnalyzeResponse {
        analysis: None,
        elapsed_ms: 0,
      })
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:8001".to_string(),
      words_file: None,
    };

    // スタブを注入（ファイルアクセス不要）
    let service = Arc::new(DummyService) as Arc<dyn WordApiService>;
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // ルーターが正常に作成できることを確認
  }
}
