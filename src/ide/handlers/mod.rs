//! LSP リクエストハンドラー群
pub mod code_action;
pub mod document_sync;
pub mod execute_command;
pub mod lifecycle;
