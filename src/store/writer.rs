//! ロケールストアの書き出し（Dart ソース生成）

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use super::locale;
use super::types::LocaleKeyStore;

/// 1 ロケール分の GetX `Translations` クラスを生成する
///
/// 値は埋め込みの改行やクォートを許すためトリプルクォートで包む。
/// エントリはストアの挿入順のまま出力する。
#[must_use]
pub fn render_messages_file(locale: &str, entries: &IndexMap<String, String>) -> String {
    let mut buffer = String::new();
    buffer.push_str(
        "import 'package:get/get_navigation/src/root/internacionalization.dart';\n\n",
    );
    let _ = writeln!(
        buffer,
        "class Messages{} extends Translations {{",
        locale::capitalize(locale)
    );
    buffer.push_str("  @override\n");
    buffer.push_str("  Map<String, Map<String, String>> get keys => {\n");
    let _ = writeln!(buffer, "    '{}_{}': {{", locale, locale.to_uppercase());
    for (key, value) in entries {
        let _ = writeln!(buffer, "      '{key}': '''{value}''',");
    }
    buffer.push_str("    },\n");
    buffer.push_str("  };\n");
    buffer.push_str("}\n");
    buffer
}

/// ストア全体をディレクトリへ書き出す
///
/// ロケールごとに 1 ファイル。既存ファイルは上書きし、ディレクトリが
/// 無ければ（祖先ごと）作成する。空のロケールも最小の有効なファイルを生成する。
///
/// # Errors
/// ディレクトリ作成またはファイル書き込みに失敗した場合
pub fn write_store(store: &LocaleKeyStore, dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;

    for (locale, entries) in store.iter() {
        let path = dir.join(locale::file_name(locale));
        std::fs::write(&path, render_messages_file(locale, entries))?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "Wrote translation file");
    }

    Ok(())
}
