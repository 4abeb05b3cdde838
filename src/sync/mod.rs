//! アップロード / フェッチの同期操作
mod error;
mod fetch;
mod upload;

pub use error::SyncError;
pub use fetch::{
    FetchSummary,
    fetch,
};
pub use upload::{
    UploadSummary,
    upload,
};
