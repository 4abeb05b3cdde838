//! Dart ソースから未翻訳候補のリテラルを抽出する
//!
//! 完全なパーサーではなく、1 行に収まるクォート文字列だけを対象にした
//! 意図的に狭い文法で走査する。translation ファイル自体は走査対象外
//! （インデクサー側の exclude パターンで除く）。

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types;

use super::types::LiteralUsage;

/// 1 行内の `'...'` / `"..."` リテラル（エスケープと改行は含まない）
#[allow(clippy::unwrap_used)] // 定数パターン
static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'([^'\\\n]*)'|"([^"\\\n]*)""#).unwrap()
});

/// ソースを走査して未翻訳候補のリテラルを返す
///
/// 次のものはスキップする:
/// - 既存キーの参照（直後が `.tr`）および既知の翻訳キーそのもの
/// - URL（`http://` / `https://`）
/// - `import` / `export` / `part` 行のリテラル
/// - `min_length` 未満の短いリテラル
#[must_use]
pub fn find_untranslated_literals(
    source: &str,
    known_keys: &HashSet<String>,
    min_length: usize,
) -> Vec<LiteralUsage> {
    let mut found = Vec::new();

    for captures in LITERAL_RE.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(inner) = captures.get(1).or_else(|| captures.get(2)) else {
            continue;
        };
        let text = inner.as_str();

        if text.chars().count() < min_length {
            continue;
        }
        if is_url(text) {
            continue;
        }
        if is_key_reference(source, whole.end()) {
            continue;
        }
        if known_keys.contains(text) {
            continue;
        }
        if is_directive_line(source, whole.start()) {
            continue;
        }

        found.push(LiteralUsage {
            text: text.to_string(),
            range: types::range_between(source, whole.start(), whole.end()),
        });
    }

    found
}

fn is_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// リテラル直後が `.tr`（GetX のキー参照）か
fn is_key_reference(source: &str, literal_end: usize) -> bool {
    let Some(rest) = source.get(literal_end..) else {
        return false;
    };
    let Some(after) = rest.strip_prefix(".tr") else {
        return false;
    };
    // `.trim()` などの別メソッドと区別する
    !after.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

/// リテラルの行が import / export / part 指令か
fn is_directive_line(source: &str, literal_start: usize) -> bool {
    let line_start = source
        .get(..literal_start)
        .and_then(|prefix| prefix.rfind('\n').map(|i| i + 1))
        .unwrap_or(0);
    let line = source.get(line_start..).unwrap_or("").lines().next().unwrap_or("");
    let trimmed = line.trim_start();
    ["import ", "export ", "part "].iter().any(|directive| trimmed.starts_with(directive))
}
