//! TranslationTable ヘッダーの導出と逆変換

use std::sync::LazyLock;

use regex::Regex;

use crate::store::locale;

/// ヘッダー 0 列目の固定ラベル
pub const KEY_COLUMN: &str = "variable_name";
/// ヒント行 0 列目のラベル
pub const HINT_LABEL: &str = "translator";
/// ヒント行に置く例文（ソースロケール列に入る）
const HINT_SAMPLE: &str = "Hello";

/// ヘッダーセル `English (en)` から識別子を取り出すパターン
#[allow(clippy::unwrap_used)] // 定数パターン
static LOCALE_IN_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// ヘッダー行を導出する
///
/// `variable_name`, `English (en)`, `Ukrainian (uk)`, ... の形。
/// 表示名が未知のロケールは識別子がそのまま表示名になる。
#[must_use]
pub fn derive_header(locales: &[String]) -> Vec<String> {
    let mut cells = Vec::with_capacity(locales.len() + 1);
    cells.push(KEY_COLUMN.to_string());
    for locale in locales {
        cells.push(format!("{} ({})", locale::display_name(locale), locale));
    }
    cells
}

/// ヒント行を導出する
///
/// 2 列目に例文、`en` 以外の各ロケールへ GOOGLETRANSLATE 式を置く。
/// スプレッドシート上の作業補助であって、翻訳データとしては扱わない。
#[must_use]
pub fn hint_row(locales: &[String]) -> Vec<String> {
    let mut cells = vec![HINT_LABEL.to_string(), HINT_SAMPLE.to_string()];
    for locale in locales {
        if locale == "en" {
            continue;
        }
        cells.push(format!(r#"=PROPER(GOOGLETRANSLATE($B2; "en"; "{locale}"))"#));
    }
    cells
}

/// ヘッダー行からロケール順を復元する
///
/// 0 列目はキー列なので読み飛ばす。括弧書きを含まないセルはロケールを
/// 寄与しない（エラーにしない）。
#[must_use]
pub fn parse_header(cells: &[String]) -> Vec<String> {
    cells
        .iter()
        .skip(1)
        .filter_map(|cell| LOCALE_IN_HEADER.captures(cell))
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn locales(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    fn derive_header_formats_display_name_and_id() {
        let header = derive_header(&locales(&["en", "uk", "tlh"]));

        assert_that!(
            header,
            elements_are![
                eq(KEY_COLUMN),
                eq("English (en)"),
                eq("Ukrainian (uk)"),
                // 未知のロケールは識別子がそのまま表示名になる
                eq("tlh (tlh)")
            ]
        );
    }

    /// ヘッダーの逆変換（括弧無しのセルは無視）
    #[rstest]
    fn parse_header_recovers_locales() {
        let cells = locales(&["variable_name", "English (en)", "Українська (uk)"]);

        assert_that!(parse_header(&cells), elements_are![eq("en"), eq("uk")]);
    }

    #[rstest]
    fn parse_header_skips_cells_without_parenthetical() {
        let cells = locales(&["variable_name", "notes", "German (de)"]);

        assert_that!(parse_header(&cells), elements_are![eq("de")]);
    }

    #[rstest]
    fn parse_header_of_derived_header_is_identity() {
        let order = locales(&["en", "uk", "ru", "de"]);

        let recovered = parse_header(&derive_header(&order));

        assert_eq!(recovered, order);
    }

    #[rstest]
    fn hint_row_skips_en_and_references_sample_cell() {
        let row = hint_row(&locales(&["en", "uk", "de"]));

        assert_that!(
            row,
            elements_are![
                eq(HINT_LABEL),
                eq("Hello"),
                eq(r#"=PROPER(GOOGLETRANSLATE($B2; "en"; "uk"))"#),
                eq(r#"=PROPER(GOOGLETRANSLATE($B2; "en"; "de"))"#)
            ]
        );
    }

    #[rstest]
    fn hint_row_without_en_has_formula_per_locale() {
        let row = hint_row(&locales(&["de", "fr"]));

        assert_that!(row, len(eq(4)));
    }
}
