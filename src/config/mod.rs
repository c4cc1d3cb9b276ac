#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint, validate_source_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/s-emulator/api/upload";
pub const DEFAULT_FILE_PATH: &str = "test_reminder.xml";

/// Resolved target of one verification cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    pub endpoint: String,
    pub file_path: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            file_path: DEFAULT_FILE_PATH.to_string(),
        }
    }
}

impl VerifyConfig {
    /// Explicit overrides win over the file, the file wins over the defaults.
    pub fn resolve(
        endpoint: Option<&str>,
        file_path: Option<&str>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: endpoint
                .or_else(|| file.and_then(TomlConfig::endpoint))
                .map(str::to_string)
                .unwrap_or(defaults.endpoint),
            file_path: file_path
                .or_else(|| file.and_then(TomlConfig::file_path))
                .map(str::to_string)
                .unwrap_or(defaults.file_path),
        }
    }
}

impl ConfigProvider for VerifyConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl Validate for VerifyConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("endpoint", &self.endpoint)?;
        validate_source_path("file_path", &self.file_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_target() {
        let config = VerifyConfig::resolve(None, None, None);
        assert_eq!(config.endpoint, "http://localhost:8080/s-emulator/api/upload");
        assert_eq!(config.file_path, "test_reminder.xml");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolution_order() {
        let file = TomlConfig::from_toml_str(
            "[target]\nendpoint = \"http://file.example/upload\"\n[source]\nfile_path = \"file.xml\"\n",
        )
        .unwrap();

        let from_file = VerifyConfig::resolve(None, None, Some(&file));
        assert_eq!(from_file.endpoint, "http://file.example/upload");
        assert_eq!(from_file.file_path, "file.xml");

        let overridden = VerifyConfig::resolve(Some("http://cli.example/upload"), None, Some(&file));
        assert_eq!(overridden.endpoint, "http://cli.example/upload");
        assert_eq!(overridden.file_path, "file.xml");
    }

    #[test]
    fn test_malformed_endpoint_fails_validation() {
        let config = VerifyConfig::resolve(Some("://nowhere"), None, None);
        assert!(config.validate().is_err());
    }
}
