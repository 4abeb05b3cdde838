//! ワークスペースのインデックス処理
//!
//! ロケールストアを読んで既知キー集合を作り、対象の Dart ソースを
//! 走査して未翻訳リテラルの診断を生成する。

use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use tower_lsp::lsp_types::Url;

use crate::config::I18nSettings;
use crate::ide::diagnostics;
use crate::store::{
    locale,
    reader,
};

use super::types::{
    FileDiagnostics,
    IndexerError,
    WorkspaceIndex,
};

/// ワークスペースをインデックスする
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkspaceIndexer;

impl WorkspaceIndexer {
    /// 新しいインデクサーを作成
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// ワークスペースをインデックス
    ///
    /// # Errors
    /// - include / exclude パターンが不正
    /// - ロケールストアの読み込み失敗
    pub async fn index_workspace(
        &self,
        workspace_path: &Path,
        settings: &I18nSettings,
    ) -> Result<WorkspaceIndex, IndexerError> {
        tracing::debug!(workspace_path = %workspace_path.display(), "Indexing workspace");

        let messages_dir = workspace_path.join(&settings.messages_dir);
        let known_keys = load_known_keys(&messages_dir)?;

        let files = find_source_files(
            workspace_path,
            &settings.include_patterns,
            &settings.exclude_patterns,
        )?;

        // 並列処理でファイルを走査
        let futures: Vec<_> =
            files.iter().map(|file| scan_file(file, &known_keys, settings)).collect();
        let results = futures::future::join_all(futures).await;
        let file_diagnostics = results.into_iter().flatten().collect();

        Ok(WorkspaceIndex { known_keys, file_diagnostics })
    }
}

/// ロケールストアから既知キー集合を読む（ディレクトリが無ければ空）
fn load_known_keys(messages_dir: &Path) -> Result<HashSet<String>, IndexerError> {
    if !messages_dir.exists() {
        tracing::debug!(dir = %messages_dir.display(), "Messages directory not found");
        return Ok(HashSet::new());
    }

    let discovered = locale::discover_locales(messages_dir)?;
    let order = locale::canonical_order(&discovered);
    let store = reader::read_store(messages_dir, &order)?;
    Ok(store.key_union(&order).into_iter().collect())
}

/// 単一ファイルを走査
async fn scan_file(
    file_path: &PathBuf,
    known_keys: &HashSet<String>,
    settings: &I18nSettings,
) -> Option<FileDiagnostics> {
    let content = match tokio::fs::read_to_string(file_path).await {
        Ok(content) => content,
        Err(e) => {
            // ファイル読み込みエラーは警告として扱い、処理を続行
            tracing::warn!("Failed to read file {:?}: {}", file_path, e);
            return None;
        }
    };

    let Ok(uri) = Url::from_file_path(file_path) else {
        tracing::warn!("Failed to create URI for file {:?}", file_path);
        return None;
    };

    let file_diagnostics = diagnostics::generate_diagnostics(&content, known_keys, settings);
    if file_diagnostics.is_empty() {
        return None;
    }
    Some(FileDiagnostics { uri, diagnostics: file_diagnostics })
}

/// パターン集合をビルドする
pub(crate) fn build_globset(patterns: &[String]) -> Result<GlobSet, IndexerError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| IndexerError::Pattern(format!("'{pattern}': {e}")))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| IndexerError::Pattern(e.to_string()))
}

/// ファイルが走査対象か（include にマッチし exclude に当たらない）
#[must_use]
pub fn should_scan(workspace_path: &Path, file_path: &Path, settings: &I18nSettings) -> bool {
    let Ok(relative) = file_path.strip_prefix(workspace_path) else {
        return false;
    };
    let Ok(include_set) = build_globset(&settings.include_patterns) else {
        return false;
    };
    let Ok(exclude_set) = build_globset(&settings.exclude_patterns) else {
        return false;
    };
    include_set.is_match(relative) && !exclude_set.is_match(relative)
}

/// ソースファイルを検索
fn find_source_files(
    workspace_path: &Path,
    include_patterns: &[String],
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>, IndexerError> {
    let include_set = build_globset(include_patterns)?;
    let exclude_set = build_globset(exclude_patterns)?;

    let mut found_files = Vec::new();

    // ignore クレートでファイルを走査
    for result in WalkBuilder::new(workspace_path)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        // workspace からの相対パスを取得
        let Ok(relative_path) = path.strip_prefix(workspace_path) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    Ok(found_files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;
    use tower_lsp::lsp_types::Diagnostic;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn index_collects_keys_and_diagnostics() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "lib/app/translations/messages/messages_en.dart",
            "'home_title': '''Home''',\n",
        );
        write(
            root,
            "lib/pages/home.dart",
            "final title = 'home_title'.tr;\nfinal raw = 'untranslated text';\n",
        );

        let indexer = WorkspaceIndexer::new();
        let settings = I18nSettings::default();
        let index = indexer.index_workspace(root, &settings).await.unwrap();

        assert_that!(index.known_keys, contains(eq("home_title")));
        assert_that!(index.file_diagnostics, len(eq(1)));
        let file = index.file_diagnostics.first().unwrap();
        assert_that!(
            file.diagnostics,
            elements_are![field!(Diagnostic.message, contains_substring("untranslated text"))]
        );
    }

    /// 翻訳ディレクトリ配下は exclude パターンで走査対象外
    #[tokio::test]
    async fn index_skips_translation_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "lib/app/translations/messages/messages_en.dart",
            "'greeting': '''Hello there''',\n",
        );

        let indexer = WorkspaceIndexer::new();
        let settings = I18nSettings::default();
        let index = indexer.index_workspace(root, &settings).await.unwrap();

        assert_that!(index.file_diagnostics, is_empty());
    }

    /// メッセージディレクトリが無くてもインデックスは成功する
    #[tokio::test]
    async fn index_without_messages_dir() {
        let temp_dir = TempDir::new().unwrap();

        let indexer = WorkspaceIndexer::new();
        let settings = I18nSettings::default();
        let index = indexer.index_workspace(temp_dir.path(), &settings).await.unwrap();

        assert_that!(index.known_keys, is_empty());
    }

    #[rstest]
    fn should_scan_respects_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let settings = I18nSettings::default();

        assert!(should_scan(root, &root.join("lib/pages/home.dart"), &settings));
        assert!(!should_scan(
            root,
            &root.join("lib/app/translations/messages/messages_en.dart"),
            &settings
        ));
        assert!(!should_scan(root, &root.join("test/widget_test.dart"), &settings));
        assert!(!should_scan(Path::new("/elsewhere"), &root.join("lib/a.dart"), &settings));
    }
}
