use crate::core::errors::{Error, Result};
use crate::metrics::DEFAULT_RECURSION_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".metricmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub lint: LintConfig,
}

/// Engine tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Depth bound for every recursive tree traversal.
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recursion_limit: default_recursion_limit(),
        }
    }
}

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}

/// External linter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Run the linter as part of every analysis.
    #[serde(default)]
    pub enabled: bool,

    /// Linter executable, resolved on PATH.
    #[serde(default = "default_linter_command")]
    pub command: String,

    /// Arguments placed before the file path.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_linter_command(),
            args: Vec::new(),
        }
    }
}

fn default_linter_command() -> String {
    "pylint".to_string()
}

/// Load configuration from an explicit path, or from `.metricmap.toml` in the
/// working directory when present. No file means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Configuration(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
