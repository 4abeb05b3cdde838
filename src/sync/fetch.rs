//! フェッチ操作（リモートテーブル → ローカルストア）

use std::path::Path;

use crate::scaffold::codegen;
use crate::sheet::{
    SheetsClient,
    header,
    pivot,
};
use crate::store::writer;

use super::error::SyncError;

/// フェッチ結果の要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// ヘッダーから復元したロケール順
    pub locales: Vec<String>,
    /// 取り込んだキーの数
    pub key_count: usize,
}

/// リモートテーブルをローカルストアへ反映する
///
/// ヘッダー行からロケール順を復元し、ヒント行を除いたデータ行をピボット
/// して、ロケール別ファイルとレジストリ（`messages.dart` ほか）を再生成する。
///
/// # Errors
/// - リモート読み出しの失敗
/// - ヘッダー行が無い（空のシート）
/// - ファイル書き込みの失敗
pub async fn fetch(
    workspace_root: &Path,
    messages_dir: &Path,
    client: &dyn SheetsClient,
) -> Result<FetchSummary, SyncError> {
    let rows = client.read_all().await?;
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Err(SyncError::MissingHeader);
    };

    let locales = header::parse_header(header_row);
    let store = pivot::store_from_rows(data_rows, &locales);
    let key_count = store.key_union(&locales).len();

    writer::write_store(&store, messages_dir)?;

    let project_name = workspace_root
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("app");
    codegen::write_generated(workspace_root, project_name, &locales, &store)?;

    tracing::info!(keys = key_count, locales = ?locales, "Fetched translations");
    Ok(FetchSummary { locales, key_count })
}
