//! ロケール識別子の規約（ファイル名・並び順・表示名）

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// 翻訳ファイル名のプレフィックス
pub const FILE_PREFIX: &str = "messages_";
/// 翻訳ファイルの拡張子
pub const FILE_SUFFIX: &str = ".dart";

/// ヘッダー導出時に常に先頭へ置くロケール（この順序で固定）
pub const PRIORITY_LOCALES: [&str; 3] = ["en", "uk", "ru"];

/// English display names for locale identifiers.
///
/// ヘッダーセル `English (en)` の表示名に使う。ここに無いロケールは
/// 識別子をそのまま表示名にする（導出を中断しない）。
static DISPLAY_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("ar", "Arabic"),
        ("az", "Azerbaijani"),
        ("be", "Belarusian"),
        ("bg", "Bulgarian"),
        ("cs", "Czech"),
        ("da", "Danish"),
        ("de", "German"),
        ("el", "Greek"),
        ("en", "English"),
        ("es", "Spanish"),
        ("et", "Estonian"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("he", "Hebrew"),
        ("hi", "Hindi"),
        ("hr", "Croatian"),
        ("hu", "Hungarian"),
        ("hy", "Armenian"),
        ("id", "Indonesian"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("ka", "Georgian"),
        ("kk", "Kazakh"),
        ("ko", "Korean"),
        ("lt", "Lithuanian"),
        ("lv", "Latvian"),
        ("nl", "Dutch"),
        ("no", "Norwegian"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("pt_br", "Brazilian Portuguese"),
        ("ro", "Romanian"),
        ("ru", "Russian"),
        ("sk", "Slovak"),
        ("sl", "Slovenian"),
        ("sq", "Albanian"),
        ("sr", "Serbian"),
        ("sv", "Swedish"),
        ("th", "Thai"),
        ("tr", "Turkish"),
        ("uk", "Ukrainian"),
        ("uz", "Uzbek"),
        ("vi", "Vietnamese"),
        ("zh", "Chinese"),
    ])
});

/// Normalize locale identifier (lowercase and replace - with _)
fn normalize(locale: &str) -> String {
    locale.to_lowercase().replace('-', "_")
}

/// 表示名を取得（未知のロケールは識別子をそのまま返す）
#[must_use]
pub fn display_name(locale: &str) -> &str {
    DISPLAY_NAMES.get(normalize(locale).as_str()).copied().unwrap_or(locale)
}

/// `messages_<locale>.dart` 形式のファイル名を組み立てる
#[must_use]
pub fn file_name(locale: &str) -> String {
    format!("{FILE_PREFIX}{locale}{FILE_SUFFIX}")
}

/// ファイル名からロケール識別子を取り出す
///
/// 規約に合わない名前は `None`（ディレクトリ内の他のファイルは無視される）。
#[must_use]
pub fn locale_from_file_name(name: &str) -> Option<&str> {
    let stem = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// メッセージディレクトリからロケール識別子を列挙する
///
/// # Errors
/// ディレクトリ自体が読めない場合
pub fn discover_locales(dir: &Path) -> io::Result<Vec<String>> {
    let mut locales = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(locale) = locale_from_file_name(name) {
            locales.push(locale.to_string());
        }
    }
    locales.sort();
    Ok(locales)
}

/// 正準ロケール順を計算する
///
/// 優先ロケールを固定順で先頭に置き、残りは辞書順で続ける。
/// 1 操作につき 1 回計算し、ヘッダー導出・ピボット・コード生成の全てで
/// 同じ値を共有する。
#[must_use]
pub fn canonical_order(discovered: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = PRIORITY_LOCALES
        .iter()
        .filter(|priority| discovered.iter().any(|locale| locale == *priority))
        .map(|priority| (*priority).to_string())
        .collect();

    let mut rest: Vec<String> = discovered
        .iter()
        .filter(|locale| !PRIORITY_LOCALES.contains(&locale.as_str()))
        .cloned()
        .collect();
    rest.sort();
    rest.dedup();

    ordered.extend(rest);
    ordered
}

/// Dart クラス名サフィックス用に先頭を大文字化する
#[must_use]
pub(crate) fn capitalize(locale: &str) -> String {
    let mut chars = locale.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
