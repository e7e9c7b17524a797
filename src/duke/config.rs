use crate::error::{DukeError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 60;

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "DUKE_HOME";

/// Configuration for duke, read from `<data dir>/config.json`.
///
/// The file is written by hand; duke only reads it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DukeConfig {
    /// File name of the task list inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Width of the separator line printed around each reply
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for DukeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl DukeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DukeConfig = serde_json::from_str(&content)?;
        if config.data_file.trim().is_empty() {
            return Err(DukeError::Store(format!(
                "{}: data_file must not be empty",
                config_path.display()
            )));
        }
        Ok(config)
    }
}

/// Picks the data directory: an explicit path, then `DUKE_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "duke", "duke")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DukeError::Store("Could not determine a data directory".to_string()))
}
