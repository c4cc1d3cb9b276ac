pub mod report;
pub mod verifier;

pub use crate::domain::model::{RawResponse, UploadRequest, UploadResult};
pub use crate::domain::ports::{ConfigProvider, Storage, Transport};
pub use crate::utils::error::Result;
