//! ロケールストア（ロケール別翻訳ファイルの読み書き）
pub mod locale;
pub mod reader;
pub mod types;
pub mod writer;

pub use types::LocaleKeyStore;
