//! 行 ↔ ストアのピボット変換

use crate::store::LocaleKeyStore;

/// アップロード方向: ストアから全幅のデータ行を生成する
///
/// キーの和集合（初出順）を 1 キー 1 行で出力する。あるロケールに値が
/// 無ければ空文字列で埋める。1 ロケールにしか無いキーも行は全幅のまま
/// 落とさない。
#[must_use]
pub fn rows_from_store(store: &LocaleKeyStore, locale_order: &[String]) -> Vec<Vec<String>> {
    store
        .key_union(locale_order)
        .into_iter()
        .map(|key| {
            let mut row = Vec::with_capacity(locale_order.len() + 1);
            row.push(key.clone());
            for locale in locale_order {
                row.push(store.get(locale, &key).unwrap_or_default().to_string());
            }
            row
        })
        .collect()
}

/// フェッチ方向: ヘッダー後のデータ行からストアを構築する
///
/// 先頭のヒント行は表示用なので読み飛ばす。キー列が空の行は表現でき
/// ないため丸ごとスキップする。テーブルに存在するキーは全ロケールに
/// エントリを持つ（値が空文字列のこともある）。
#[must_use]
pub fn store_from_rows(rows: &[Vec<String>], locale_order: &[String]) -> LocaleKeyStore {
    let mut store = LocaleKeyStore::new();
    for locale in locale_order {
        store.ensure_locale(locale);
    }

    // rows の先頭はヒント行
    for row in rows.iter().skip(1) {
        let Some(key) = row.first() else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        for (column, locale) in locale_order.iter().enumerate() {
            let value = row.get(column + 1).cloned().unwrap_or_default();
            store.insert(locale, key.clone(), value);
        }
    }

    store
}
