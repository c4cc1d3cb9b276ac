pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpTransport, LocalStorage};
pub use config::VerifyConfig;
pub use core::verifier::{report_failure, run_verification, UploadVerifier};
pub use utils::error::{ErrorKind, ExitStatus, Result, VerifyError};
