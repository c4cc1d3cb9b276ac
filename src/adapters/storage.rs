use crate::domain::ports::Storage;
use crate::utils::error::{Result, VerifyError};
use std::fs;
use std::path::Path;

/// Read-only filesystem access rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(&full_path).map_err(|source| VerifyError::FileAccessError {
            path: path.to_string(),
            source,
        })
    }
}
