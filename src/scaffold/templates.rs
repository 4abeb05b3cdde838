//! 初期構造の静的テンプレート
//!
//! `{{project}}` はワークスペースのプロジェクト名で置換される。
//! プレースホルダコメント（`//IMPORTS` など）はフェッチ時の再生成で
//! 実体に置き換わる。

/// `lib/app/translations/messages.dart` の雛形
pub const MESSAGES_TEMPLATE: &str = r"import 'package:get/get_navigation/src/root/internacionalization.dart';
//IMPORTS

class Messages extends Translations {
  //INITIALIZATION

  @override
  Map<String, Map<String, String>> get keys {
    Map<String, Map<String, String>> combinedKeys = {
      //IMPLEMENT
    };
    return combinedKeys;
  }
}
";

/// `lib/app/translations/tr_settings.dart` の雛形
pub const TR_SETTINGS_TEMPLATE: &str = r"import 'package:flutter/material.dart';
import 'package:flutter_localizations/flutter_localizations.dart';
import 'package:syncfusion_localizations/syncfusion_localizations.dart';

mixin TrSettings {
  static const locale = Locale('en');
  static const fallbackLocale = Locale('en');
  static List<Locale> supportedLocales = List.of([
    //SUPPORTED_LOCALES
  ]);
  static final languages = [
    //LOCALES
  ];
  static const Iterable<LocalizationsDelegate> localizationsDelegates = [
    GlobalMaterialLocalizations.delegate,
    GlobalWidgetsLocalizations.delegate,
    GlobalCupertinoLocalizations.delegate,
    SfGlobalLocalizations.delegate,
  ];
}
";

/// `lib/app/translations/tr_strings.dart` の雛形
pub const TR_STRINGS_TEMPLATE: &str = "class Strings {}\n";

/// `lib/app/translations/messages/messages_en.dart` の雛形
pub const MESSAGES_EN_TEMPLATE: &str = r"import 'package:get/get_navigation/src/root/internacionalization.dart';
import 'package:{{project}}/app/translations/tr_strings.dart';

class MessagesEn extends Translations {
  @override
  Map<String, Map<String, String>> get keys => {'en_EN': {}};
}
";

/// `lib/app/app.dart` の雛形
pub const APP_TEMPLATE: &str = r"import 'package:flutter/material.dart';
import 'package:get/get.dart';
import 'package:{{project}}/app/translations/messages.dart';
import 'package:{{project}}/app/translations/tr_settings.dart';

class App extends StatefulWidget {
  const App({super.key});

  @override
  State<App> createState() => _AppState();
}

class _AppState extends State<App> {
  @override
  Widget build(BuildContext context) {
    return GetMaterialApp(
      locale: Get.locale,
      translations: Messages(),
      fallbackLocale: TrSettings.fallbackLocale,
      localizationsDelegates: TrSettings.localizationsDelegates,
    );
  }
}
";

/// pubspec.yaml へ依存を差し込むアンカー行
pub const PUBSPEC_ANCHOR: &str = "sdk: flutter";

/// アンカーの直後へ差し込む依存
pub const PUBSPEC_DEPENDENCIES: [&str; 3] = [
    "\n  flutter_localizations:\n    sdk: flutter\n",
    "  get: ^4.7.2",
    "  syncfusion_localizations: ^25.2.4",
];

/// テンプレート中の `{{project}}` を置換する
#[must_use]
pub fn apply_project_name(template: &str, project_name: &str) -> String {
    template.replace("{{project}}", project_name)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn apply_project_name_replaces_all_occurrences() {
        let applied = apply_project_name(APP_TEMPLATE, "my_app");

        assert_that!(applied, contains_substring("package:my_app/app/translations/messages.dart"));
        assert_that!(applied, not(contains_substring("{{project}}")));
    }
}
