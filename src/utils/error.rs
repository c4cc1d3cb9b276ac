use crate::domain::model::{TransportFailure, TransportFailureKind};
use thiserror::Error;

/// Hint printed when the upload service cannot be reached.
pub const SERVER_START_HINT: &[&str] = &[
    "Make sure the server is running:",
    "cd S-emulator/s-server",
    "./run-server.bat",
];

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Cannot read source file '{path}': {source}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file '{path}' is not valid UTF-8: {source}")]
    EncodingError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Source path '{path}' has no file name")]
    MissingFileNameError { path: String },

    #[error("Could not connect to {endpoint}: {detail}")]
    ConnectionError { endpoint: String, detail: String },

    #[error("Response (HTTP {status}) is not valid JSON: {source}")]
    ResponseParseError {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {endpoint} failed: {detail}")]
    TransportError { endpoint: String, detail: String },

    #[error("Invalid configuration value for '{field}': {reason} (value: '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Console output failed: {0}")]
    OutputError(#[from] std::io::Error),
}

/// The four failure classes an operator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileAccess,
    Connection,
    ResponseParse,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl VerifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifyError::FileAccessError { .. }
            | VerifyError::EncodingError { .. }
            | VerifyError::MissingFileNameError { .. } => ErrorKind::FileAccess,
            VerifyError::ConnectionError { .. } => ErrorKind::Connection,
            VerifyError::ResponseParseError { .. } => ErrorKind::ResponseParse,
            VerifyError::TransportError { .. }
            | VerifyError::InvalidConfigValueError { .. }
            | VerifyError::ConfigError { .. }
            | VerifyError::SerializationError(_)
            | VerifyError::OutputError(_) => ErrorKind::Unknown,
        }
    }

    /// Lift an adapter-level failure into the error taxonomy.
    pub fn from_transport(endpoint: &str, failure: TransportFailure) -> Self {
        match failure.kind {
            TransportFailureKind::ConnectionRefused => VerifyError::ConnectionError {
                endpoint: endpoint.to_string(),
                detail: failure.detail,
            },
            TransportFailureKind::Other => VerifyError::TransportError {
                endpoint: endpoint.to_string(),
                detail: failure.detail,
            },
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match self.kind() {
            ErrorKind::FileAccess
            | ErrorKind::Connection
            | ErrorKind::ResponseParse
            | ErrorKind::Unknown => ExitStatus::Failure,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.kind() {
            ErrorKind::Connection => "Could not connect to server!".to_string(),
            ErrorKind::ResponseParse => "Server response is not valid JSON!".to_string(),
            ErrorKind::FileAccess | ErrorKind::Unknown => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> Vec<String> {
        match self {
            VerifyError::ConnectionError { .. } => {
                SERVER_START_HINT.iter().map(|line| line.to_string()).collect()
            }
            VerifyError::FileAccessError { path, .. } | VerifyError::MissingFileNameError { path } => {
                vec![format!(
                    "Check that '{}' exists relative to the working directory",
                    path
                )]
            }
            VerifyError::EncodingError { .. } => {
                vec!["Save the source file as UTF-8 text".to_string()]
            }
            VerifyError::InvalidConfigValueError { field, .. } => {
                vec![format!("Fix the '{}' setting and retry", field)]
            }
            _ => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
