//! リテラルからの翻訳キー自動生成

/// リテラルから `snake_case` のキーを生成する
///
/// ASCII 以外を含むリテラルは生成しない（呼び出し側がユーザーに
/// キー名を問い合わせる）。英数字以外は `_` 1 文字に畳み、先頭が
/// 数字ならプレフィックスを付ける。
#[must_use]
pub fn suggest_key(literal: &str) -> Option<String> {
    if !literal.is_ascii() {
        return None;
    }

    let mut key = String::with_capacity(literal.len());
    let mut previous_was_separator = true; // 先頭の '_' を抑制
    for c in literal.chars() {
        if c.is_ascii_alphanumeric() {
            key.push(c.to_ascii_lowercase());
            previous_was_separator = false;
        } else if !previous_was_separator {
            key.push('_');
            previous_was_separator = true;
        }
    }
    while key.ends_with('_') {
        key.pop();
    }

    if key.is_empty() {
        return None;
    }
    if key.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        key.insert_str(0, "key_");
    }
    Some(key)
}
