//! テキストドキュメント同期ハンドラー

use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams,
    DidCloseTextDocumentParams,
    DidOpenTextDocumentParams,
    Url,
};

use crate::ide::backend::Backend;
use crate::ide::diagnostics;
use crate::indexer::workspace::should_scan;

/// `textDocument/didOpen` を処理
pub async fn did_open(backend: &Backend, params: DidOpenTextDocumentParams) {
    let uri = params.text_document.uri;
    let text = params.text_document.text;

    backend.state.documents.lock().await.insert(uri.clone(), text.clone());
    publish(backend, uri, &text).await;
}

/// `textDocument/didChange` を処理
pub async fn did_change(backend: &Backend, params: DidChangeTextDocumentParams) {
    let uri = params.text_document.uri;

    // FULL sync なので最後の変更が全文
    let Some(change) = params.content_changes.into_iter().last() else {
        return;
    };
    let text = change.text;

    backend.state.documents.lock().await.insert(uri.clone(), text.clone());
    publish(backend, uri, &text).await;
}

/// `textDocument/didClose` を処理
pub async fn did_close(backend: &Backend, params: DidCloseTextDocumentParams) {
    backend.state.documents.lock().await.remove(&params.text_document.uri);
}

/// ドキュメントの診断を再計算して配信する
async fn publish(backend: &Backend, uri: Url, text: &str) {
    let Ok(file_path) = uri.to_file_path() else {
        tracing::warn!("Failed to convert URI to file path: {}", uri);
        return;
    };

    let workspace_root = backend.state.workspace_root.lock().await.clone();
    let Some(workspace_root) = workspace_root else {
        return;
    };

    let settings = backend.config_manager.lock().await.get_settings().clone();
    if !should_scan(&workspace_root, &file_path, &settings) {
        return;
    }

    let known_keys = backend.state.known_keys.lock().await.clone();
    let file_diagnostics = diagnostics::generate_diagnostics(text, &known_keys, &settings);
    backend.client.publish_diagnostics(uri.clone(), file_diagnostics, None).await;

    tracing::debug!(uri = %uri, "Diagnostics published");
}
