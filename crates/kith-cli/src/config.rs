//! Optional JSON configuration.
//!
//! Looked up at `.kith/config.json` unless `--config` points elsewhere.
//! A missing default file is not an error; every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_DIR: &str = ".kith";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Relationship file loaded when no file is given.
    pub default_file: Option<PathBuf>,
    /// Text shown before each interactive command.
    pub prompt: String,
    /// Set to false to disable colored output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: None,
            prompt: "Enter a command: ".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Default config location under `base`.
    pub fn default_path(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the config.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and defaults are used if nothing is there.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = Self::default_path(Path::new("."));
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
