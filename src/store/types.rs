//! ロケールストアの型定義

use indexmap::{
    IndexMap,
    IndexSet,
};

/// ロケール識別子 → (翻訳キー → 翻訳値) の挿入順マップ
///
/// 1 回の同期操作ごとにディスクまたはリモートテーブルから作り直される
/// エフェメラルな値で、操作をまたいで保持されることはない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleKeyStore {
    by_locale: IndexMap<String, IndexMap<String, String>>,
}

impl LocaleKeyStore {
    /// 空のストアを作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ロケールのエントリを確保する
    ///
    /// ファイルの無いロケールも空マップとして列に数えるために使う。
    pub fn ensure_locale(&mut self, locale: &str) {
        if !self.by_locale.contains_key(locale) {
            self.by_locale.insert(locale.to_string(), IndexMap::new());
        }
    }

    /// キーと値を登録する（同キーは上書き、位置は初出のまま）
    pub fn insert(&mut self, locale: &str, key: impl Into<String>, value: impl Into<String>) {
        self.ensure_locale(locale);
        if let Some(entries) = self.by_locale.get_mut(locale) {
            entries.insert(key.into(), value.into());
        }
    }

    /// 1 キーの値を取得
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.by_locale.get(locale)?.get(key).map(String::as_str)
    }

    /// 1 ロケール分のエントリを取得
    #[must_use]
    pub fn entries(&self, locale: &str) -> Option<&IndexMap<String, String>> {
        self.by_locale.get(locale)
    }

    /// (ロケール, エントリ) を挿入順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.by_locale.iter().map(|(locale, entries)| (locale.as_str(), entries))
    }

    /// 保持しているロケール数
    #[must_use]
    pub fn locale_count(&self) -> usize {
        self.by_locale.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_locale.is_empty()
    }

    /// 全ロケールを横断したキーの和集合（初出順）
    ///
    /// 与えられたロケール順で走査するため、同じ入力に対して常に同じ
    /// 並びを返す。あるロケールにしか無いキーも必ず含まれる。
    #[must_use]
    pub fn key_union(&self, locale_order: &[String]) -> Vec<String> {
        let mut keys: IndexSet<String> = IndexSet::new();
        for locale in locale_order {
            if let Some(entries) = self.by_locale.get(locale) {
                for key in entries.keys() {
                    keys.insert(key.clone());
                }
            }
        }
        keys.into_iter().collect()
    }
}
