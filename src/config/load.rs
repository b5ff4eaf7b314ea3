use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SlicerConfig;
use crate::error::SlicerError;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SlicerConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::parse(&content, config_dir)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse config JSON whose relative paths resolve against `config_dir`.
    pub fn parse(content: &str, config_dir: PathBuf) -> Result<Self> {
        let config: SlicerConfig = serde_json::from_str(content)?;
        if config.version != 1 {
            return Err(SlicerError::UnsupportedConfigVersion(config.version).into());
        }
        Ok(Self { config, config_dir })
    }

    /// Built-in defaults, resolved against the working directory.
    pub fn defaults() -> Self {
        Self {
            config: SlicerConfig::default(),
            config_dir: PathBuf::new(),
        }
    }

    /// Resolve a path from the config relative to the config file directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.config_dir.join(path)
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.output_dir)
    }
}
