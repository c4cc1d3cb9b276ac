use crate::domain::model::{RawResponse, TransportFailure, UploadRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn file_path(&self) -> &str;
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one JSON POST and hand back whatever status and body arrived.
    async fn post_json(
        &self,
        endpoint: &str,
        request: &UploadRequest,
    ) -> std::result::Result<RawResponse, TransportFailure>;
}
