//! アップロード / フェッチ同期の統合テスト
//!
//! リモートはインメモリのフェイクに差し替えて、ローカルストアとの
//! 往復で翻訳キーが欠落しないことを確かめる。

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use flutter_i18n_language_server::sheet::{
    InMemorySheetsClient,
    SheetsClient,
};
use flutter_i18n_language_server::store::{
    LocaleKeyStore,
    reader,
    writer,
};
use flutter_i18n_language_server::sync;
use tempfile::TempDir;

/// `{en: {a: "1"}, uk: {a: "2", b: "3"}}` をローカルストアとして用意する
fn seed_source_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    let mut store = LocaleKeyStore::new();
    store.insert("en", "a", "1");
    store.insert("uk", "a", "2");
    store.insert("uk", "b", "3");
    writer::write_store(&store, dir.path()).unwrap();
    dir
}

#[tokio::test]
async fn upload_then_fetch_round_trips_with_empty_fill() {
    let source = seed_source_store();
    let client = InMemorySheetsClient::new();

    let uploaded = sync::upload(source.path(), &client).await.unwrap();
    assert_eq!(uploaded.locales, vec!["en".to_string(), "uk".to_string()]);
    assert_eq!(uploaded.key_count, 2);

    let target = TempDir::new().unwrap();
    let messages_dir = target.path().join("lib").join("app").join("translations").join("messages");
    let fetched = sync::fetch(target.path(), &messages_dir, &client).await.unwrap();
    assert_eq!(fetched.locales, vec!["en".to_string(), "uk".to_string()]);
    assert_eq!(fetched.key_count, 2);

    // キー b は en 側に明示的な空エントリとして現れる
    let round = reader::read_store(&messages_dir, &fetched.locales).unwrap();
    assert_eq!(round.get("en", "a"), Some("1"));
    assert_eq!(round.get("en", "b"), Some(""));
    assert_eq!(round.get("uk", "a"), Some("2"));
    assert_eq!(round.get("uk", "b"), Some("3"));
}

#[tokio::test]
async fn upload_twice_produces_identical_table() {
    let source = seed_source_store();
    let client = InMemorySheetsClient::new();

    sync::upload(source.path(), &client).await.unwrap();
    let first = client.snapshot();

    sync::upload(source.path(), &client).await.unwrap();
    let second = client.snapshot();

    assert_eq!(first, second);
}

#[tokio::test]
async fn upload_writes_header_hint_and_full_width_rows() {
    let source = seed_source_store();
    let client = InMemorySheetsClient::new();

    sync::upload(source.path(), &client).await.unwrap();

    let rows = client.read_all().await.unwrap();
    // ヘッダー + ヒント + キー 2 行
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec!["variable_name", "English (en)", "Ukrainian (uk)"]);
    assert_eq!(rows[1][0], "translator");
    // 全データ行はキー列 + ロケール 2 列
    assert!(rows[2..].iter().all(|row| row.len() == 3));
}

#[tokio::test]
async fn fetch_writes_empty_column_for_locale_without_values() {
    let client = InMemorySheetsClient::new();
    client
        .write_header(
            &["variable_name".to_string(), "English (en)".to_string(), "German (de)".to_string()],
            &["translator".to_string(), "Hello".to_string()],
        )
        .await
        .unwrap();
    client
        .append_rows(&[vec!["greeting".to_string(), "Hello".to_string()]])
        .await
        .unwrap();

    let target = TempDir::new().unwrap();
    let messages_dir = target.path().join("messages");
    let fetched = sync::fetch(target.path(), &messages_dir, &client).await.unwrap();
    assert_eq!(fetched.locales, vec!["en".to_string(), "de".to_string()]);

    // de 列に値は無いが、ファイルと空エントリは生成される
    let store = reader::read_store(&messages_dir, &fetched.locales).unwrap();
    assert_eq!(store.get("de", "greeting"), Some(""));
    assert!(messages_dir.join("messages_de.dart").exists());
}

#[tokio::test]
async fn fetch_regenerates_registry_files() {
    let source = seed_source_store();
    let client = InMemorySheetsClient::new();
    sync::upload(source.path(), &client).await.unwrap();

    let target = TempDir::new().unwrap();
    let messages_dir = target.path().join("lib").join("app").join("translations").join("messages");
    sync::fetch(target.path(), &messages_dir, &client).await.unwrap();

    let translations = target.path().join("lib").join("app").join("translations");
    let registry = std::fs::read_to_string(translations.join("messages.dart")).unwrap();
    let strings = std::fs::read_to_string(translations.join("tr_strings.dart")).unwrap();

    assert!(registry.contains("messages/messages_en.dart"));
    assert!(registry.contains("..._messagesUk.keys,"));
    assert!(strings.contains("static String a = 'a';"));
    assert!(strings.contains("static String b = 'b';"));
}

#[tokio::test]
async fn fetch_from_empty_sheet_is_missing_header_error() {
    let client = InMemorySheetsClient::new();
    let target = TempDir::new().unwrap();

    let result = sync::fetch(target.path(), &target.path().join("messages"), &client).await;

    assert!(matches!(result, Err(sync::SyncError::MissingHeader)));
    // ディスクには何も書かれない
    assert!(!target.path().join("messages").exists());
}

#[tokio::test]
async fn upload_without_messages_dir_is_an_error() {
    let dir = TempDir::new().unwrap();
    let client = InMemorySheetsClient::new();

    let result = sync::upload(&dir.path().join("missing"), &client).await;

    assert!(matches!(result, Err(sync::SyncError::Io(_))));
}
