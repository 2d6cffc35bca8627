//! Cross-platform application paths

use std::path::PathBuf;

use crate::error::TermError;

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, TermError> {
        let base = dirs::config_dir().ok_or(TermError::NoConfigDir)?;
        Ok(Self::with_base(base))
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_dir: base.join("numtape"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
