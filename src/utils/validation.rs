use crate::utils::error::{Result, VerifyError};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> VerifyError {
    VerifyError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The upload endpoint must be an absolute http(s) URL with a host.
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint.trim())
        .map_err(|e| invalid(field_name, endpoint, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            endpoint,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid(field_name, endpoint, "URL has no host")),
    }
}

/// The source path must name a file, since its base name becomes `filename`.
pub fn validate_source_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(invalid(field_name, path, "Path points at a directory"));
    }

    match Path::new(path).file_name().and_then(|name| name.to_str()) {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(invalid(field_name, path, "Path has no file name")),
    }
}
