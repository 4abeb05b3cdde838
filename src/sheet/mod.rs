//! タブ形式交換アダプター
//!
//! ロケールストアとスプレッドシート表現（ヘッダー + キー行）の相互変換と、
//! リモートテーブルへのクライアント実装。
pub mod client;
pub mod google;
pub mod header;
pub mod memory;
pub mod pivot;

pub use client::{
    SheetError,
    SheetsClient,
};
pub use google::GoogleSheetsClient;
pub use memory::InMemorySheetsClient;
