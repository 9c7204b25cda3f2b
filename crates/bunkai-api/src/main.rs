//! bunkai-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bunkai_api::ApiError;
use bunkai_api::api::AppState;
use bunkai_api::api::run_server;
use bunkai_api::config::Config;
use bunkai_api::service::WordApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(words_file = ?config.words_file, "設定を読み込みました");

  // サービスの初期化
  let service = Arc::new(WordApiServiceFull::new(&config)?);
  tracing::info!("単語帳サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
