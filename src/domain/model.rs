use serde::Serialize;

/// Body of the upload call: the source file's base name and its exact text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    pub filename: String,
    pub content: String,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Length in characters, as shown in the report banner.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

/// What came back over the wire, before the body is checked for JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// A response whose body parsed as JSON. The body schema belongs to the
/// upload service and is never destructured here.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub status_code: u16,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    ConnectionRefused,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct TransportFailure {
    pub kind: TransportFailureKind,
    pub detail: String,
}

impl TransportFailure {
    pub fn connection_refused(detail: impl Into<String>) -> Self {
        Self {
            kind: TransportFailureKind::ConnectionRefused,
            detail: detail.into(),
        }
    }

    pub fn other(detail: impl Into<String>) -> Self {
        Self {
            kind: TransportFailureKind::Other,
            detail: detail.into(),
        }
    }
}
