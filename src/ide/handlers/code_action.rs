//! Code Action ハンドラー

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CodeActionParams,
    CodeActionResponse,
};

use crate::ide::backend::Backend;
use crate::ide::code_actions;

/// `textDocument/codeAction` リクエストを処理
///
/// クライアントが範囲内の診断を `context` に載せてくるので、
/// そこから Quick Fix を組み立てる。
pub async fn handle_code_action(
    _backend: &Backend,
    params: CodeActionParams,
) -> Result<Option<CodeActionResponse>> {
    let uri = params.text_document.uri;
    let actions = code_actions::build_quick_fixes(&uri, &params.context.diagnostics);

    if actions.is_empty() {
        return Ok(None);
    }
    Ok(Some(actions))
}
