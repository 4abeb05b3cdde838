//! フェッチ後のレジストリ再生成
//!
//! ロケール別ファイルを束ねる `messages.dart`、サポートロケールを並べる
//! `tr_settings.dart`、キー名の定数クラス `tr_strings.dart` を作り直す。

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::store::{
    LocaleKeyStore,
    locale,
};

/// `messages.dart` を生成する（各ロケールの import と展開）
#[must_use]
pub fn render_messages_registry(project_name: &str, locales: &[String]) -> String {
    let mut imports = String::new();
    let mut initialization = String::new();
    let mut implement = String::new();

    for loc in locales {
        let class_suffix = locale::capitalize(loc);
        let _ = writeln!(
            imports,
            "import 'package:{project_name}/app/translations/messages/{}';",
            locale::file_name(loc)
        );
        let _ = writeln!(
            initialization,
            "  final Messages{class_suffix} _messages{class_suffix} = Messages{class_suffix}();"
        );
        let _ = writeln!(implement, "      ..._messages{class_suffix}.keys,");
    }

    format!(
        "import 'package:get/get_navigation/src/root/internacionalization.dart';
{imports}
class Messages extends Translations {{
{initialization}
  @override
  Map<String, Map<String, String>> get keys {{
    Map<String, Map<String, String>> combinedKeys = {{
{implement}    }};
    return combinedKeys;
  }}
}}
"
    )
}

/// `tr_settings.dart` を生成する（サポートロケールの列挙）
#[must_use]
pub fn render_tr_settings(locales: &[String]) -> String {
    let mut supported = String::new();
    let mut languages = String::new();

    for loc in locales {
        let _ = writeln!(supported, "    const Locale('{loc}'),");
        let _ = writeln!(languages, "    '{loc}',");
    }

    format!(
        "import 'package:flutter/material.dart';
import 'package:flutter_localizations/flutter_localizations.dart';
import 'package:syncfusion_localizations/syncfusion_localizations.dart';

mixin TrSettings {{
  static const locale = Locale('en');
  static const fallbackLocale = Locale('en');
  static List<Locale> supportedLocales = List.of([
{supported}  ]);
  static final languages = [
{languages}  ];
  static const Iterable<LocalizationsDelegate> localizationsDelegates = [
    GlobalMaterialLocalizations.delegate,
    GlobalWidgetsLocalizations.delegate,
    GlobalCupertinoLocalizations.delegate,
    SfGlobalLocalizations.delegate,
  ];
}}
"
    )
}

/// `tr_strings.dart` を生成する（キー名の静的メンバー）
#[must_use]
pub fn render_tr_strings(keys: &[String]) -> String {
    let mut buffer = String::from("class Strings {\n");
    for key in keys {
        let _ = writeln!(buffer, "  static String {key} = '{key}';");
    }
    buffer.push_str("}\n");
    buffer
}

/// レジストリ 3 ファイルを書き出す
///
/// # Errors
/// ディレクトリ作成またはファイル書き込みに失敗した場合
pub fn write_generated(
    workspace_root: &Path,
    project_name: &str,
    locales: &[String],
    store: &LocaleKeyStore,
) -> io::Result<()> {
    let translations = workspace_root.join("lib").join("app").join("translations");
    std::fs::create_dir_all(&translations)?;

    let keys = store.key_union(locales);

    std::fs::write(
        translations.join("messages.dart"),
        render_messages_registry(project_name, locales),
    )?;
    std::fs::write(translations.join("tr_settings.dart"), render_tr_settings(locales))?;
    std::fs::write(translations.join("tr_strings.dart"), render_tr_strings(&keys))?;

    tracing::debug!(locales = ?locales, keys = keys.len(), "Regenerated registry files");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::store_from_entries;

    fn locales(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    fn registry_imports_actual_file_names() {
        let content = render_messages_registry("my_app", &locales(&["en", "uk"]));

        // import はロケール別ファイルの実名（小文字）を指す
        assert_that!(
            content,
            contains_substring(
                "import 'package:my_app/app/translations/messages/messages_en.dart';"
            )
        );
        assert_that!(
            content,
            contains_substring("final MessagesEn _messagesEn = MessagesEn();")
        );
        assert_that!(content, contains_substring("..._messagesUk.keys,"));
    }

    #[rstest]
    fn tr_settings_lists_every_locale() {
        let content = render_tr_settings(&locales(&["en", "uk"]));

        assert_that!(content, contains_substring("const Locale('en'),"));
        assert_that!(content, contains_substring("const Locale('uk'),"));
        assert_that!(content, contains_substring("'en',"));
        assert_that!(content, contains_substring("mixin TrSettings"));
    }

    #[rstest]
    fn tr_strings_has_one_member_per_key() {
        let content = render_tr_strings(&locales(&["hello", "farewell"]));

        assert_that!(content, contains_substring("static String hello = 'hello';"));
        assert_that!(content, contains_substring("static String farewell = 'farewell';"));
    }

    #[rstest]
    fn tr_strings_empty_keys_is_minimal_class() {
        assert_that!(render_tr_strings(&[]), eq("class Strings {\n}\n"));
    }

    #[rstest]
    fn write_generated_creates_all_three_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_from_entries(&[("en", "hello", "Hello"), ("uk", "hello", "Привіт")]);
        let order = locales(&["en", "uk"]);

        write_generated(temp_dir.path(), "my_app", &order, &store).unwrap();

        let translations = temp_dir.path().join("lib").join("app").join("translations");
        let registry = std::fs::read_to_string(translations.join("messages.dart")).unwrap();
        let strings = std::fs::read_to_string(translations.join("tr_strings.dart")).unwrap();

        assert_that!(registry, contains_substring("class Messages extends Translations"));
        assert_that!(strings, contains_substring("static String hello = 'hello';"));
        assert!(translations.join("tr_settings.dart").exists());
    }
}
