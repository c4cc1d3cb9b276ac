use crate::config::toml_config::TomlConfig;
use crate::config::VerifyConfig;
use crate::utils::error::Result;
use clap::Parser;

/// Every flag is optional; with none the compiled-in target is used.
#[derive(Debug, Clone, Parser)]
#[command(name = "upload-verify")]
#[command(about = "Send a file to the upload service once and report the response")]
pub struct CliConfig {
    /// Upload endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Source file, relative to the working directory
    #[arg(long)]
    pub file: Option<String>,

    /// TOML file with [target] endpoint and [source] file_path
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<VerifyConfig> {
        let file = self
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;

        Ok(VerifyConfig::resolve(
            self.endpoint.as_deref(),
            self.file.as_deref(),
            file.as_ref(),
        ))
    }
}
