//! Configuration file I/O operations

use std::path::Path;

use anyhow::{Context, Result};

use super::Config;

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a working directory (.defines/config.toml).
    /// Falls back to defaults when no config file exists.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = Self::config_path(dir);
        if path.exists() {
            return Self::from_file(&path);
        }

        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(Self::with_defaults())
    }

    /// Load from an explicit path if given, otherwise from the working directory
    pub fn load(work_dir: &Path, config_override: Option<&Path>) -> Result<Self> {
        match config_override {
            Some(p) if p.is_absolute() => Self::from_file(p),
            Some(p) => Self::from_file(&work_dir.join(p)),
            None => Self::from_dir(work_dir),
        }
    }

    /// Config with no targets and the default defines file location
    pub fn with_defaults() -> Self {
        Self::default()
    }
}
