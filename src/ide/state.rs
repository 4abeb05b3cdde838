//! LSP サーバーの共有状態

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use tower_lsp::lsp_types::Url;

/// LSP サーバーの共有状態
///
/// `Backend` から状態管理の責務を分離し、ハンドラー間で共有可能にします。
///
/// # ロック順序
///
/// 複数のロックを同時に取得する場合は、以下の順序を厳守してください：
/// 1. `documents`
/// 2. `known_keys`
/// 3. `workspace_root`
#[derive(Clone, Debug, Default)]
pub struct ServerState {
    /// 開いているドキュメントの全文（FULL sync）
    pub documents: Arc<Mutex<HashMap<Url, String>>>,
    /// ロケールストア由来の既知キー集合
    pub known_keys: Arc<Mutex<HashSet<String>>>,
    /// ワークスペースルート
    pub workspace_root: Arc<Mutex<Option<PathBuf>>>,
}

impl ServerState {
    /// 新しい `ServerState` を作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
