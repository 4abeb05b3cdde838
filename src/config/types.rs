use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Directory holding the per-locale `messages_<locale>.dart` files,
    /// relative to the workspace root.
    pub messages_dir: String,

    /// Sheet title inside the synchronized spreadsheet.
    pub sheet_name: String,

    /// Service-account credentials file name, relative to the workspace root.
    pub credentials_file: String,

    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,

    /// Locales always placed first when deriving the sheet header,
    /// in this exact order (remaining locales follow lexicographically).
    pub priority_locales: Vec<String>,

    /// Locale the translator hint formulas translate from.
    pub source_locale: String,

    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosticsConfig {
    /// Flag quoted literals that are not translation-key references.
    pub untranslated_literals: bool,
    /// Literals shorter than this are never flagged.
    pub min_literal_length: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { untranslated_literals: true, min_literal_length: 2 }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.messages_dir.is_empty() {
            errors.push(ValidationError::new(
                "messagesDir",
                "The directory cannot be empty. Example: \"lib/app/translations/messages\"",
            ));
        }

        if self.sheet_name.is_empty() {
            errors.push(ValidationError::new(
                "sheetName",
                "The sheet name cannot be empty. Example: \"localization\"",
            ));
        }

        if self.credentials_file.is_empty() {
            errors.push(ValidationError::new(
                "credentialsFile",
                "The file name cannot be empty. Example: \"google-service-account.json\"",
            ));
        }

        if self.source_locale.is_empty() {
            errors.push(ValidationError::new(
                "sourceLocale",
                "The locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "includePatterns",
                "At least one pattern is required. Example: [\"lib/**/*.dart\"]",
            ));
        }

        for (index, pattern) in self.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            messages_dir: "lib/app/translations/messages".to_string(),
            sheet_name: "localization".to_string(),
            credentials_file: "google-service-account.json".to_string(),
            include_patterns: vec!["lib/**/*.dart".to_string()],
            exclude_patterns: vec![
                "lib/app/translations/**".to_string(),
                ".dart_tool/**".to_string(),
                "build/**".to_string(),
            ],
            priority_locales: vec!["en".to_string(), "uk".to_string(), "ru".to_string()],
            source_locale: "en".to_string(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}
