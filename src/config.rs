use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants;
use crate::error::{ExportError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_input: String,
    pub output_dir: PathBuf,
    pub complete_file: String,
    pub search_file: String,
    /// Worksheet to read; first sheet when unset.
    pub sheet: Option<String>,
    pub csv_delimiter: char,
    pub active_status_text: String,
    pub inactive_status_text: String,
    /// Directory for JSON log files; console-only logging when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: constants::DEFAULT_INPUT_FILE.to_string(),
            output_dir: PathBuf::from("."),
            complete_file: constants::COMPLETE_OUTPUT_FILE.to_string(),
            search_file: constants::SEARCH_OUTPUT_FILE.to_string(),
            sheet: None,
            csv_delimiter: ',',
            active_status_text: constants::ACTIVE_STATUS_TEXT.to_string(),
            inactive_status_text: constants::INACTIVE_STATUS_TEXT.to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory, or defaults if it is absent.
    pub fn load() -> Result<Self> {
        let path = Path::new(constants::DEFAULT_CONFIG_FILE);
        if !path.exists() {
            debug!("No {} found, using built-in defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            ExportError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.complete_file.trim().is_empty() || self.search_file.trim().is_empty() {
            return Err(ExportError::Config(
                "output file names must not be empty".to_string(),
            ));
        }
        if self.complete_file == self.search_file {
            return Err(ExportError::Config(format!(
                "complete_file and search_file both point to '{}'",
                self.complete_file
            )));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(ExportError::Config(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }
        Ok(())
    }

    pub fn complete_path(&self) -> PathBuf {
        self.output_dir.join(&self.complete_file)
    }

    pub fn search_path(&self) -> PathBuf {
        self.output_dir.join(&self.search_file)
    }
}
