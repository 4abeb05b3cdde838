//! 初期構造テンプレートとコード生成
pub mod codegen;
pub mod structure;
pub mod templates;

pub use structure::{
    ScaffoldReport,
    create_translation_structure,
    run_flutter_pub_get,
};
