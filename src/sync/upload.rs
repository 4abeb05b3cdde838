//! アップロード操作（ローカルストア → リモートテーブル）

use std::path::Path;

use crate::sheet::{
    SheetsClient,
    header,
    pivot,
};
use crate::store::{
    locale,
    reader,
};

use super::error::SyncError;

/// アップロード結果の要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    /// ヘッダーに使った正準ロケール順
    pub locales: Vec<String>,
    /// 追記したキー行の数
    pub key_count: usize,
}

/// ローカルストアをリモートテーブルへ反映する
///
/// リモート側は常に全消去してから書き直す（マージはしない）。
/// 正準ロケール順はここで 1 度だけ計算し、ヘッダーとピボットの両方に使う。
///
/// # Errors
/// - メッセージディレクトリが読めない
/// - リモート呼び出しの失敗（シートが部分的に変更されたまま残り得る）
pub async fn upload(
    messages_dir: &Path,
    client: &dyn SheetsClient,
) -> Result<UploadSummary, SyncError> {
    let discovered = locale::discover_locales(messages_dir)?;
    let locales = locale::canonical_order(&discovered);
    let store = reader::read_store(messages_dir, &locales)?;

    let header_row = header::derive_header(&locales);
    let hint_row = header::hint_row(&locales);
    let rows = pivot::rows_from_store(&store, &locales);

    client.clear().await?;
    client.write_header(&header_row, &hint_row).await?;
    client.append_rows(&rows).await?;

    tracing::info!(keys = rows.len(), locales = ?locales, "Uploaded translations");
    Ok(UploadSummary { locales, key_count: rows.len() })
}
