//! API設定の定数定義

/// 登録テキストの最大長（バイト単位）
///
/// 単語・短いフレーズの登録を想定し 1KB までを許可する。
/// 巨大な入力によるリソース枯渇を防ぐための制限。
pub const MAX_TEXT_LENGTH: usize = 1_000;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// 単語一覧のデフォルト取得件数
///
/// limit クエリパラメータ省略時に返す件数。
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// 単語一覧の最大取得件数
///
/// limit クエリパラメータで指定できる上限。超過分はこの値に丸められる。
pub const MAX_LIST_LIMIT: usize = 1_000;
