//! ロケールストアの読み込み
//!
//! ホストファイル（Dart）の文法は解釈せず、`key: '''value'''` 形式の
//! エントリだけを正規表現で抜き出す。マッチしないテキストはすべて無視する。

use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::locale;
use super::types::LocaleKeyStore;

/// エントリの narrow grammar
///
/// キーは識別子風（`[A-Za-z0-9_]+`、閉じクォート必須）、値は複数行に
/// またがってよいトリプルクォートリテラル。
#[allow(clippy::unwrap_used)] // 定数パターン
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)['"]?([A-Za-z0-9_]+)['"]:\s+'''(.*?)'''"#).unwrap()
});

/// 1 ファイル分のテキストからエントリを抽出する
///
/// マッチが 0 件でもエラーにはしない。
#[must_use]
pub fn extract_entries(content: &str) -> Vec<(String, String)> {
    ENTRY_RE
        .captures_iter(content)
        .filter_map(|cap| {
            let key = cap.get(1)?.as_str().to_string();
            let value = cap.get(2)?.as_str().to_string();
            Some((key, value))
        })
        .collect()
}

/// ディレクトリから `LocaleKeyStore` を構築する
///
/// ファイルの無いロケールは空マップとして扱う（エラーにしない）。
///
/// # Errors
/// 存在するファイルの読み込みに失敗した場合のみ
pub fn read_store(dir: &Path, locales: &[String]) -> io::Result<LocaleKeyStore> {
    let mut store = LocaleKeyStore::new();

    for locale in locales {
        store.ensure_locale(locale);

        let path = dir.join(locale::file_name(locale));
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(locale = %locale, "Translation file not found, treating as empty");
                continue;
            }
            Err(e) => return Err(e),
        };

        for (key, value) in extract_entries(&content) {
            store.insert(locale, key, value);
        }
    }

    Ok(store)
}
