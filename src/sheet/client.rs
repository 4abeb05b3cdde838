//! テーブルリソースへの抽象インターフェース

use async_trait::async_trait;
use thiserror::Error;

/// リモートテーブル操作のエラー
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Sheet '{0}' not found in spreadsheet")]
    SheetNotFound(String),

    #[error("Google Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to sign service-account assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// タブ形式ドキュメントへの操作能力
///
/// 同期操作が必要とする最小のインターフェース。呼び出しは 1 操作の中で
/// 逐次に発行される（同一操作内で並行にリモート呼び出しはしない）。
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// シートの全セルをクリアする
    async fn clear(&self) -> Result<(), SheetError>;

    /// ヘッダー行とヒント行を先頭に書き込む
    async fn write_header(&self, header: &[String], hint: &[String]) -> Result<(), SheetError>;

    /// データ行を末尾に追記する
    async fn append_rows(&self, rows: &[Vec<String>]) -> Result<(), SheetError>;

    /// ヘッダーを含む全行を読み出す
    async fn read_all(&self) -> Result<Vec<Vec<String>>, SheetError>;
}
