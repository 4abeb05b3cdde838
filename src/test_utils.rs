//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::store::LocaleKeyStore;

/// (ロケール, キー, 値) の組から `LocaleKeyStore` を作成する
pub(crate) fn store_from_entries(entries: &[(&str, &str, &str)]) -> LocaleKeyStore {
    let mut store = LocaleKeyStore::new();
    for (locale, key, value) in entries {
        store.insert(locale, (*key).to_string(), (*value).to_string());
    }
    store
}
