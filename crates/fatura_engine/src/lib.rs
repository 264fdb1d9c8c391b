//! Fatura engine: invoice upload IO and effect execution.
mod engine;
mod types;
mod upload;

pub use engine::UploadHandle;
pub use types::EngineEvent;
pub use upload::{ReqwestUploader, UploadSettings, Uploader};
