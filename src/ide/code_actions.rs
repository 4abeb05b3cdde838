//! 未翻訳リテラルの Quick Fix 生成

use std::collections::HashMap;

use tower_lsp::lsp_types::{
    CodeAction,
    CodeActionKind,
    CodeActionOrCommand,
    Command,
    Diagnostic,
    NumberOrString,
    TextEdit,
    Url,
    WorkspaceEdit,
};

use super::diagnostics::UNTRANSLATED_LITERAL;

/// 診断から Quick Fix を組み立てる
///
/// 提案キーを持つ診断（ASCII リテラル）は `'key'.tr` への置換編集を返す。
/// 提案キーが無いもの（非 ASCII）はエディタ側でキー名を入力してから
/// `flutterI18n.extractKey` を呼び直すコマンドを返す。
#[must_use]
pub fn build_quick_fixes(uri: &Url, diagnostics: &[Diagnostic]) -> Vec<CodeActionOrCommand> {
    diagnostics
        .iter()
        .filter(|diagnostic| {
            matches!(
                &diagnostic.code,
                Some(NumberOrString::String(code)) if code == UNTRANSLATED_LITERAL
            )
        })
        .map(|diagnostic| quick_fix_for(uri, diagnostic))
        .collect()
}

fn quick_fix_for(uri: &Url, diagnostic: &Diagnostic) -> CodeActionOrCommand {
    let suggested = diagnostic
        .data
        .as_ref()
        .and_then(|data| data.get("suggestedKey"))
        .and_then(|value| value.as_str());

    let action = if let Some(key) = suggested {
        let edit = TextEdit { range: diagnostic.range, new_text: format!("'{key}'.tr") };
        let mut changes = HashMap::new();
        changes.insert(uri.clone(), vec![edit]);

        CodeAction {
            title: format!("Replace with '{key}'.tr"),
            kind: Some(CodeActionKind::QUICKFIX),
            diagnostics: Some(vec![diagnostic.clone()]),
            edit: Some(WorkspaceEdit { changes: Some(changes), ..WorkspaceEdit::default() }),
            ..CodeAction::default()
        }
    } else {
        CodeAction {
            title: "Extract to translation key...".to_string(),
            kind: Some(CodeActionKind::QUICKFIX),
            diagnostics: Some(vec![diagnostic.clone()]),
            command: Some(Command {
                title: "Extract to translation key".to_string(),
                command: "flutterI18n.extractKey".to_string(),
                arguments: Some(vec![serde_json::json!({
                    "uri": uri.to_string(),
                    "range": diagnostic.range,
                })]),
            }),
            ..CodeAction::default()
        }
    };

    CodeActionOrCommand::CodeAction(action)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use tower_lsp::lsp_types::{
        Position,
        Range,
    };

    use super::*;

    fn diagnostic(code: &str, data: Option<serde_json::Value>) -> Diagnostic {
        Diagnostic {
            range: Range {
                start: Position { line: 0, character: 10 },
                end: Position { line: 0, character: 24 },
            },
            code: Some(NumberOrString::String(code.to_string())),
            data,
            ..Diagnostic::default()
        }
    }

    fn test_uri() -> Url {
        Url::parse("file:///project/lib/pages/home.dart").unwrap()
    }

    #[googletest::test]
    fn test_quick_fix_with_suggested_key_builds_edit() {
        let uri = test_uri();
        let diagnostics = vec![diagnostic(
            UNTRANSLATED_LITERAL,
            Some(serde_json::json!({ "suggestedKey": "welcome_back" })),
        )];

        let actions = build_quick_fixes(&uri, &diagnostics);

        expect_that!(actions, len(eq(1)));
        let Some(CodeActionOrCommand::CodeAction(action)) = actions.first() else {
            panic!("expected a code action");
        };
        expect_that!(action.title, contains_substring("'welcome_back'.tr"));

        let changes = action.edit.as_ref().and_then(|e| e.changes.as_ref()).unwrap();
        let edits = changes.get(&uri).unwrap();
        expect_that!(edits, len(eq(1)));
        expect_that!(
            edits.first().map(|e| e.new_text.clone()),
            some(eq("'welcome_back'.tr"))
        );
    }

    /// 提案キーが無い場合はコマンド経由の action になる
    #[googletest::test]
    fn test_quick_fix_without_suggestion_uses_command() {
        let uri = test_uri();
        let diagnostics = vec![diagnostic(UNTRANSLATED_LITERAL, None)];

        let actions = build_quick_fixes(&uri, &diagnostics);

        let Some(CodeActionOrCommand::CodeAction(action)) = actions.first() else {
            panic!("expected a code action");
        };
        expect_that!(action.edit.is_none(), eq(true));
        let command = action.command.as_ref().unwrap();
        expect_that!(command.command, eq("flutterI18n.extractKey"));
    }

    /// 他の診断コードは対象外
    #[googletest::test]
    fn test_other_diagnostics_are_ignored() {
        let uri = test_uri();
        let diagnostics = vec![diagnostic("some-other-code", None)];

        let actions = build_quick_fixes(&uri, &diagnostics);

        expect_that!(actions, is_empty());
    }
}
