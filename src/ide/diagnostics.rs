//! 診断メッセージ生成モジュール

use std::collections::HashSet;

use tower_lsp::lsp_types::{
    Diagnostic,
    DiagnosticSeverity,
    NumberOrString,
};

use crate::analyzer;
use crate::config::I18nSettings;

/// 診断の source 名
pub const SOURCE: &str = "flutter-i18n";
/// 未翻訳リテラル診断のコード
pub const UNTRANSLATED_LITERAL: &str = "untranslated-literal";

/// ソーステキストの診断メッセージを生成
///
/// 既存の翻訳キー参照・URL に該当しないクォート文字列を警告にする。
/// ASCII リテラルには提案キーを `data` に載せる（Quick Fix が使う）。
///
/// # Arguments
/// * `source` - 走査対象のソーステキスト
/// * `known_keys` - ロケールストア由来の既知キー集合
/// * `settings` - 診断設定
#[must_use]
pub fn generate_diagnostics(
    source: &str,
    known_keys: &HashSet<String>,
    settings: &I18nSettings,
) -> Vec<Diagnostic> {
    if !settings.diagnostics.untranslated_literals {
        return Vec::new();
    }

    analyzer::find_untranslated_literals(
        source,
        known_keys,
        settings.diagnostics.min_literal_length,
    )
    .into_iter()
    .map(|usage| {
        let data = analyzer::suggest_key(&usage.text)
            .map(|key| serde_json::json!({ "suggestedKey": key }));

        Diagnostic {
            range: usage.range.into(),
            severity: Some(DiagnosticSeverity::WARNING),
            code: Some(NumberOrString::String(UNTRANSLATED_LITERAL.to_string())),
            code_description: None,
            source: Some(SOURCE.to_string()),
            message: format!("String literal is not localized: \"{}\"", usage.text),
            related_information: None,
            tags: None,
            data,
        }
    })
    .collect()
}
