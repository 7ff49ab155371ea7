//! Project configuration
//!
//! Settings come from an optional `.printstrip.toml` next to where the tool
//! runs. Command-line flags override anything set here.
//!
//! ```toml
//! root = "ruwaq_jawi/lib/core"
//! exclude = "app_logger.dart"
//! strategy = "scan"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::strip::Strategy;

/// printstrip configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory walked for source files
    pub root: PathBuf,
    /// Path substring marking the logging-utility file
    pub exclude: String,
    /// Statement-finding strategy
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(paths::DEFAULT_ROOT),
            exclude: paths::LOGGER_FILE.to_string(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `.printstrip.toml` from the current directory
    pub fn load_default() -> anyhow::Result<Self> {
        Self::load(&paths::config_file())
    }
}
