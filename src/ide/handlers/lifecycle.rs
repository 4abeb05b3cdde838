//! initialize / initialized ハンドラー

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CodeActionProviderCapability,
    DidChangeConfigurationParams,
    ExecuteCommandOptions,
    InitializeParams,
    InitializeResult,
    InitializedParams,
    MessageType,
    OneOf,
    ServerCapabilities,
    TextDocumentSyncCapability,
    TextDocumentSyncKind,
    WorkDoneProgressOptions,
    WorkspaceFoldersServerCapabilities,
    WorkspaceServerCapabilities,
};

use crate::ide::backend::Backend;

/// サーバーが提供するコマンド
pub const COMMANDS: [&str; 4] = [
    "flutterI18n.initTranslations",
    "flutterI18n.uploadLocalTranslations",
    "flutterI18n.fetchCloudTranslations",
    "flutterI18n.extractKey",
];

/// `initialize` リクエストを処理
pub async fn initialize(
    backend: &Backend,
    params: InitializeParams,
) -> Result<InitializeResult> {
    // ワークスペースルートを取得
    let workspace_root = params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .and_then(|folder| folder.uri.to_file_path().ok());

    // ConfigManager に設定を読み込ませる
    let mut config_manager = backend.config_manager.lock().await;
    if let Err(error) = config_manager.load_settings(workspace_root.clone()) {
        tracing::error!("Configuration error during initialize: {}", error);
    }
    drop(config_manager); // ロックを早めに解放

    *backend.state.workspace_root.lock().await = workspace_root;

    Ok(InitializeResult {
        server_info: None,
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(
                TextDocumentSyncKind::FULL,
            )),
            code_action_provider: Some(CodeActionProviderCapability::Simple(true)),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: COMMANDS.iter().map(|command| (*command).to_string()).collect(),
                work_done_progress_options: WorkDoneProgressOptions::default(),
            }),
            workspace: Some(WorkspaceServerCapabilities {
                workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                    supported: Some(true),
                    change_notifications: Some(OneOf::Left(true)),
                }),
                file_operations: None,
            }),
            ..ServerCapabilities::default()
        },
    })
}

/// `initialized` 通知を処理
pub async fn initialized(backend: &Backend, _params: InitializedParams) {
    backend
        .client
        .log_message(MessageType::INFO, "flutter-i18n language server initialized")
        .await;
    reindex(backend).await;
}

/// `workspace/didChangeConfiguration` 通知を処理
pub async fn did_change_configuration(backend: &Backend, params: DidChangeConfigurationParams) {
    // 設定を更新
    let Ok(new_settings) = serde_json::from_value::<crate::config::I18nSettings>(params.settings)
    else {
        return;
    };

    let mut config_manager = backend.config_manager.lock().await;
    match config_manager.update_settings(new_settings) {
        Ok(()) => {
            drop(config_manager); // ロックを解放
            backend
                .client
                .log_message(MessageType::INFO, "Configuration updated successfully")
                .await;

            // 設定変更後、ワークスペースを再インデックス
            reindex(backend).await;
        }
        Err(error) => {
            backend
                .client
                .log_message(
                    MessageType::ERROR,
                    format!("Configuration validation error: {error}"),
                )
                .await;
        }
    }
}

/// ワークスペースを（再）インデックスし、診断を配信する
///
/// フェッチ後にも呼ばれ、既知キー集合を最新のストアへ同期させる。
pub async fn reindex(backend: &Backend) {
    let workspace_root = backend.state.workspace_root.lock().await.clone();
    let Some(workspace_root) = workspace_root else {
        tracing::debug!("No workspace root, skipping indexing");
        return;
    };

    let settings = backend.config_manager.lock().await.get_settings().clone();

    match backend.workspace_indexer.index_workspace(&workspace_root, &settings).await {
        Ok(index) => {
            *backend.state.known_keys.lock().await = index.known_keys;
            for file in index.file_diagnostics {
                backend.client.publish_diagnostics(file.uri, file.diagnostics, None).await;
            }
            backend.client.log_message(MessageType::INFO, "Workspace indexing complete").await;
        }
        Err(error) => {
            backend
                .client
                .log_message(MessageType::ERROR, format!("error indexing workspace: {error}"))
                .await;
        }
    }
}
