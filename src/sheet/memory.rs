//! インメモリのテーブルリソース
//!
//! スプレッドシートの代わりに行ベクタを保持するフェイク実装。
//! テストと、リモートを触らない動作確認に使う。

use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use async_trait::async_trait;

use super::client::{
    SheetError,
    SheetsClient,
};

/// 行ベクタを持つ `SheetsClient` 実装
#[derive(Debug, Default)]
pub struct InMemorySheetsClient {
    rows: Mutex<Vec<Vec<String>>>,
}

impl InMemorySheetsClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の全行のスナップショット
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<String>>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SheetsClient for InMemorySheetsClient {
    async fn clear(&self) -> Result<(), SheetError> {
        self.lock().clear();
        Ok(())
    }

    async fn write_header(&self, header: &[String], hint: &[String]) -> Result<(), SheetError> {
        let mut rows = self.lock();
        rows.insert(0, hint.to_vec());
        rows.insert(0, header.to_vec());
        Ok(())
    }

    async fn append_rows(&self, new_rows: &[Vec<String>]) -> Result<(), SheetError> {
        self.lock().extend(new_rows.iter().cloned());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Vec<String>>, SheetError> {
        Ok(self.snapshot())
    }
}
