//! 同期操作のエラー分類

use thiserror::Error;

use crate::config::CredentialsError;
use crate::sheet::SheetError;

/// 1 回の同期操作で起こり得る失敗
///
/// 資格情報のエラーはリモート呼び出しの前に検出される。リモートエラーの
/// 後はシートが部分的に書き換わったまま残り得る（クリア済み・未再投入など）。
/// 自動リトライやロールバックは行わない。
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Failed to access translation files: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet has no header row; nothing to fetch")]
    MissingHeader,
}
