use crate::domain::model::{RawResponse, TransportFailure, UploadRequest};
use crate::domain::ports::Transport;
use crate::utils::error::{Result, VerifyError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// One-shot JSON POST over reqwest. No retries, no auth, default timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| VerifyError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

fn classify(error: reqwest::Error) -> TransportFailure {
    if error.is_connect() {
        TransportFailure::connection_refused(error.to_string())
    } else {
        TransportFailure::other(error.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        request: &UploadRequest,
    ) -> std::result::Result<RawResponse, TransportFailure> {
        tracing::debug!("POST {} ({} characters)", endpoint, request.content_length());

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        tracing::debug!("Upload service answered with status {}", status);

        let body = response.text().await.map_err(classify)?;
        Ok(RawResponse { status, body })
    }
}
