//! Indexer type definitions.

use std::collections::HashSet;

use thiserror::Error;
use tower_lsp::lsp_types::{
    Diagnostic,
    Url,
};

/// 1 ファイル分の診断結果
#[derive(Debug, Clone)]
pub struct FileDiagnostics {
    pub uri: Url,
    pub diagnostics: Vec<Diagnostic>,
}

/// インデックス結果
#[derive(Debug, Clone, Default)]
pub struct WorkspaceIndex {
    /// ロケールストア由来の既知キー集合
    pub known_keys: HashSet<String>,
    /// 診断が出たファイルのリスト
    pub file_diagnostics: Vec<FileDiagnostics>,
}

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Invalid include/exclude pattern
    #[error("Invalid glob pattern: {0}")]
    Pattern(String),
    /// Error when failing to read the workspace
    #[error("Failed to read workspace: {0}")]
    Io(#[from] std::io::Error),
}
