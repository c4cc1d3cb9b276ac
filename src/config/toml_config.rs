use crate::utils::error::{Result, VerifyError};
use serde::Deserialize;
use std::path::Path;

/// Optional on-disk settings. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub target: Option<TargetConfig>,
    pub source: Option<SourceConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    pub file_path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| VerifyError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| VerifyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.target.as_ref()?.endpoint.as_deref()
    }

    pub fn file_path(&self) -> Option<&str> {
        self.source.as_ref()?.file_path.as_deref()
    }
}
