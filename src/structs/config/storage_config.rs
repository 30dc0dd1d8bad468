use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::config::constants::{CONFIG_DIR_NAME, DATA_FILE_NAME};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Defaults to `~/.edutrack/edutrack.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn data_file_path(&self) -> PathBuf {
        match &self.data_file {
            Some(path) => path.clone(),
            None => dirs::home_dir()
                .unwrap_or_default()
                .join(CONFIG_DIR_NAME)
                .join(DATA_FILE_NAME),
        }
    }
}
