//! 翻訳レイヤーの初期構造生成

use std::io;
use std::path::{
    Path,
    PathBuf,
};

use super::templates;

/// 生成結果の要約
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// 新規に書き出したファイル
    pub created: Vec<PathBuf>,
    /// pubspec.yaml に依存を追記したか
    pub pubspec_updated: bool,
    /// pubspec.yaml にアンカー行が見つからなかった
    pub pubspec_anchor_missing: bool,
}

/// `lib/app/translations` 以下の初期構造を作る
///
/// 既存のファイルには触れない（新規ファイルのみ書く）。
///
/// # Errors
/// ディレクトリ作成またはファイル書き込みに失敗した場合
pub fn create_translation_structure(
    workspace_root: &Path,
    project_name: &str,
) -> io::Result<ScaffoldReport> {
    let app = workspace_root.join("lib").join("app");
    let translations = app.join("translations");
    let messages = translations.join("messages");
    std::fs::create_dir_all(&messages)?;

    let files: [(PathBuf, String); 5] = [
        (translations.join("messages.dart"), templates::MESSAGES_TEMPLATE.to_string()),
        (translations.join("tr_settings.dart"), templates::TR_SETTINGS_TEMPLATE.to_string()),
        (translations.join("tr_strings.dart"), templates::TR_STRINGS_TEMPLATE.to_string()),
        (
            messages.join("messages_en.dart"),
            templates::apply_project_name(templates::MESSAGES_EN_TEMPLATE, project_name),
        ),
        (
            app.join("app.dart"),
            templates::apply_project_name(templates::APP_TEMPLATE, project_name),
        ),
    ];

    let mut report = ScaffoldReport::default();
    for (path, content) in files {
        if path.exists() {
            continue;
        }
        std::fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "Created file");
        report.created.push(path);
    }

    patch_pubspec(workspace_root, &mut report)?;
    Ok(report)
}

/// pubspec.yaml へ flutter_localizations / get / syncfusion_localizations を追記する
///
/// `sdk: flutter` の直後に差し込む。pubspec が無ければ何もしない。
/// 既に追記済みなら二重には差し込まない。
fn patch_pubspec(workspace_root: &Path, report: &mut ScaffoldReport) -> io::Result<()> {
    let pubspec_path = workspace_root.join("pubspec.yaml");
    if !pubspec_path.exists() {
        return Ok(());
    }

    let content = std::fs::read_to_string(&pubspec_path)?;
    if !content.contains(templates::PUBSPEC_ANCHOR) {
        report.pubspec_anchor_missing = true;
        tracing::warn!("Expected flutter SDK block not found in pubspec.yaml");
        return Ok(());
    }
    if content.contains("syncfusion_localizations") {
        return Ok(());
    }

    let insertion = std::iter::once(templates::PUBSPEC_ANCHOR)
        .chain(templates::PUBSPEC_DEPENDENCIES)
        .collect::<Vec<_>>()
        .join("\n");
    let patched = content.replacen(templates::PUBSPEC_ANCHOR, &insertion, 1);

    std::fs::write(&pubspec_path, patched)?;
    report.pubspec_updated = true;
    tracing::debug!("Dependencies added to pubspec.yaml");
    Ok(())
}

/// ワークスペースで `flutter pub get` を実行する
///
/// 成否のみ返す。出力はサーバーログへ。
///
/// # Errors
/// プロセスの起動自体に失敗した場合（`flutter` が見つからない等）
pub async fn run_flutter_pub_get(workspace_root: &Path) -> io::Result<bool> {
    let output = tokio::process::Command::new("flutter")
        .arg("pub")
        .arg("get")
        .current_dir(workspace_root)
        .output()
        .await?;

    if output.status.success() {
        tracing::debug!("flutter pub get finished");
    } else {
        tracing::warn!(
            stderr = %String::from_utf8_lossy(&output.stderr),
            "flutter pub get failed"
        );
    }
    Ok(output.status.success())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    const PUBSPEC: &str = "name: my_app

environment:
  sdk: ^3.0.0

dependencies:
  flutter:
    sdk: flutter
";

    #[rstest]
    fn creates_structure_and_files() {
        let temp_dir = TempDir::new().unwrap();

        let report = create_translation_structure(temp_dir.path(), "my_app").unwrap();

        assert_that!(report.created, len(eq(5)));
        let translations = temp_dir.path().join("lib").join("app").join("translations");
        assert!(translations.join("messages.dart").exists());
        assert!(translations.join("tr_settings.dart").exists());
        assert!(translations.join("tr_strings.dart").exists());
        assert!(translations.join("messages").join("messages_en.dart").exists());
        assert!(temp_dir.path().join("lib").join("app").join("app.dart").exists());

        let messages_en =
            fs::read_to_string(translations.join("messages").join("messages_en.dart")).unwrap();
        assert_that!(messages_en, contains_substring("package:my_app/app/translations"));
    }

    /// 既存ファイルは上書きしない
    #[rstest]
    fn existing_files_are_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let translations = temp_dir.path().join("lib").join("app").join("translations");
        fs::create_dir_all(&translations).unwrap();
        fs::write(translations.join("messages.dart"), "// hand edited").unwrap();

        let report = create_translation_structure(temp_dir.path(), "my_app").unwrap();

        assert_that!(report.created, len(eq(4)));
        let content = fs::read_to_string(translations.join("messages.dart")).unwrap();
        assert_that!(content, eq("// hand edited"));
    }

    #[rstest]
    fn patches_pubspec_after_sdk_anchor() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pubspec.yaml"), PUBSPEC).unwrap();

        let report = create_translation_structure(temp_dir.path(), "my_app").unwrap();

        assert!(report.pubspec_updated);
        let patched = fs::read_to_string(temp_dir.path().join("pubspec.yaml")).unwrap();
        assert_that!(patched, contains_substring("flutter_localizations:"));
        assert_that!(patched, contains_substring("get: ^4.7.2"));
        assert_that!(patched, contains_substring("syncfusion_localizations: ^25.2.4"));
    }

    /// 2 回実行しても依存は二重に追記されない
    #[rstest]
    fn patching_pubspec_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pubspec.yaml"), PUBSPEC).unwrap();

        create_translation_structure(temp_dir.path(), "my_app").unwrap();
        let report = create_translation_structure(temp_dir.path(), "my_app").unwrap();

        assert!(!report.pubspec_updated);
        let patched = fs::read_to_string(temp_dir.path().join("pubspec.yaml")).unwrap();
        assert_that!(patched.matches("syncfusion_localizations").count(), eq(1));
    }

    #[rstest]
    fn reports_missing_anchor() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pubspec.yaml"), "name: my_app\n").unwrap();

        let report = create_translation_structure(temp_dir.path(), "my_app").unwrap();

        assert!(report.pubspec_anchor_missing);
        assert!(!report.pubspec_updated);
    }

    /// pubspec が無いワークスペースでもエラーにしない
    #[rstest]
    fn missing_pubspec_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let report = create_translation_structure(temp_dir.path(), "my_app").unwrap();

        assert!(!report.pubspec_updated);
        assert!(!report.pubspec_anchor_missing);
    }
}
