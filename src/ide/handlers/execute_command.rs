//! Execute Command ハンドラー
//!
//! `workspace/executeCommand` リクエストを処理し、
//! 構造生成・アップロード・フェッチのコマンドを実行します。
//! 失敗はユーザー向け通知として報告し、サーバー自体は落とさない。

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde::Deserialize;
use serde_json::Value;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    ExecuteCommandParams,
    MessageType,
    Range,
    TextEdit,
    Url,
    WorkspaceEdit,
};

use crate::config::{
    self,
    I18nSettings,
};
use crate::ide::backend::Backend;
use crate::scaffold;
use crate::sheet::GoogleSheetsClient;
use crate::sync;

use super::lifecycle;

/// `workspace/executeCommand` リクエストを処理
pub async fn handle_execute_command(
    backend: &Backend,
    params: ExecuteCommandParams,
) -> Result<Option<Value>> {
    tracing::debug!(command = %params.command, "Execute Command request");

    match params.command.as_str() {
        "flutterI18n.initTranslations" => handle_init(backend).await,
        "flutterI18n.uploadLocalTranslations" => handle_upload(backend).await,
        "flutterI18n.fetchCloudTranslations" => handle_fetch(backend).await,
        "flutterI18n.extractKey" => handle_extract_key(backend, Some(params.arguments)).await,
        _ => {
            tracing::warn!("Unknown command: {}", params.command);
            Ok(None)
        }
    }
}

/// ワークスペースルートと設定を取得する（ワークスペース未設定なら通知して終了）
async fn workspace_context(backend: &Backend) -> Option<(PathBuf, I18nSettings)> {
    let root = backend.state.workspace_root.lock().await.clone();
    let Some(root) = root else {
        backend.client.show_message(MessageType::ERROR, "No workspace open").await;
        return None;
    };
    let settings = backend.config_manager.lock().await.get_settings().clone();
    Some((root, settings))
}

/// ワークスペースのディレクトリ名をプロジェクト名として使う
fn project_name(root: &Path) -> String {
    root.file_name().and_then(|name| name.to_str()).unwrap_or("app").to_string()
}

/// `flutterI18n.initTranslations` コマンドを実行
async fn handle_init(backend: &Backend) -> Result<Option<Value>> {
    let Some((root, _settings)) = workspace_context(backend).await else {
        return Ok(None);
    };

    match scaffold::create_translation_structure(&root, &project_name(&root)) {
        Ok(report) => {
            backend.client.show_message(MessageType::INFO, "Translation structure created.").await;
            if report.pubspec_anchor_missing {
                backend
                    .client
                    .show_message(
                        MessageType::WARNING,
                        "Expected flutter SDK block not found in pubspec.yaml",
                    )
                    .await;
            }
            if report.pubspec_updated {
                backend
                    .client
                    .show_message(MessageType::INFO, "Dependencies added to pubspec.yaml")
                    .await;
                run_pub_get(backend, &root).await;
            }
        }
        Err(error) => {
            backend
                .client
                .show_message(
                    MessageType::ERROR,
                    format!("Failed to create translation structure: {error}"),
                )
                .await;
        }
    }
    Ok(None)
}

/// `flutter pub get` を実行して結果を通知する
async fn run_pub_get(backend: &Backend, root: &Path) {
    match scaffold::run_flutter_pub_get(root).await {
        Ok(true) => {
            backend.client.show_message(MessageType::INFO, "flutter pub get finished").await;
        }
        Ok(false) => {
            backend
                .client
                .show_message(MessageType::WARNING, "flutter pub get failed; see server log")
                .await;
        }
        Err(error) => {
            backend
                .client
                .show_message(MessageType::WARNING, format!("Failed to run flutter pub get: {error}"))
                .await;
        }
    }
}

/// `flutterI18n.uploadLocalTranslations` コマンドを実行
async fn handle_upload(backend: &Backend) -> Result<Option<Value>> {
    let Some((root, settings)) = workspace_context(backend).await else {
        return Ok(None);
    };

    match upload_task(&root, &settings).await {
        Ok(summary) => {
            backend
                .client
                .show_message(
                    MessageType::INFO,
                    format!("Uploaded {} translation keys.", summary.key_count),
                )
                .await;
        }
        Err(error) => {
            backend
                .client
                .show_message(MessageType::ERROR, format!("Failed to upload translations: {error}"))
                .await;
        }
    }
    Ok(None)
}

/// アップロード本体（資格情報 → 接続 → 同期）
async fn upload_task(
    root: &Path,
    settings: &I18nSettings,
) -> std::result::Result<sync::UploadSummary, sync::SyncError> {
    let credentials = config::load_credentials(root, &settings.credentials_file)?;
    let client = GoogleSheetsClient::connect(&credentials, &settings.sheet_name).await?;
    sync::upload(&root.join(&settings.messages_dir), &client).await
}

/// `flutterI18n.fetchCloudTranslations` コマンドを実行
async fn handle_fetch(backend: &Backend) -> Result<Option<Value>> {
    let Some((root, settings)) = workspace_context(backend).await else {
        return Ok(None);
    };

    match fetch_task(&root, &settings).await {
        Ok(summary) => {
            backend
                .client
                .show_message(
                    MessageType::INFO,
                    format!(
                        "Generated localization files for locales: {}",
                        summary.locales.join(", ")
                    ),
                )
                .await;
            // 既知キー集合を新しいストアに合わせる
            lifecycle::reindex(backend).await;
        }
        Err(error) => {
            backend
                .client
                .show_message(MessageType::ERROR, format!("Failed to fetch translations: {error}"))
                .await;
        }
    }
    Ok(None)
}

/// フェッチ本体（資格情報 → 接続 → 同期）
async fn fetch_task(
    root: &Path,
    settings: &I18nSettings,
) -> std::result::Result<sync::FetchSummary, sync::SyncError> {
    let credentials = config::load_credentials(root, &settings.credentials_file)?;
    let client = GoogleSheetsClient::connect(&credentials, &settings.sheet_name).await?;
    sync::fetch(root, &root.join(&settings.messages_dir), &client).await
}

/// `flutterI18n.extractKey` コマンドの引数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractKeyArgs {
    /// 対象ファイルの URI
    uri: String,
    /// 置換するリテラルの範囲
    range: Range,
    /// 使用するキー名（エディタ側のプロンプト結果。無ければ編集しない）
    key: Option<String>,
}

/// `flutterI18n.extractKey` コマンドを実行
///
/// リテラルをキー参照 `'key'.tr` に置き換える。非 ASCII リテラルの
/// Quick Fix から、エディタがキー名を確認したうえで呼び直してくる。
async fn handle_extract_key(
    backend: &Backend,
    arguments: Option<Vec<Value>>,
) -> Result<Option<Value>> {
    let args = arguments.unwrap_or_default();

    let Some(first_arg) = args.first().cloned() else {
        tracing::warn!("Missing arguments for flutterI18n.extractKey");
        return Ok(None);
    };

    let parsed: ExtractKeyArgs = match serde_json::from_value(first_arg) {
        Ok(args) => args,
        Err(e) => {
            tracing::warn!("Invalid arguments for flutterI18n.extractKey: {}", e);
            return Ok(None);
        }
    };

    let Some(key) = parsed.key else {
        backend
            .client
            .show_message(
                MessageType::WARNING,
                "A key name is required to extract this literal",
            )
            .await;
        return Ok(None);
    };

    let Ok(uri) = Url::parse(&parsed.uri) else {
        tracing::warn!("Invalid URI: {}", parsed.uri);
        return Ok(None);
    };

    let edit = TextEdit { range: parsed.range, new_text: format!("'{key}'.tr") };
    let mut changes = HashMap::new();
    changes.insert(uri, vec![edit]);

    let result = backend
        .client
        .apply_edit(WorkspaceEdit { changes: Some(changes), ..WorkspaceEdit::default() })
        .await;
    if let Err(e) = result {
        tracing::error!("Failed to apply workspace edit: {}", e);
    }

    Ok(None)
}
