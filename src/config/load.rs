use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SliceConfig;
use crate::import::SheetSource;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SliceConfig,
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
        let config: SliceConfig = serde_json::from_str(content)?;
        Ok(Self { config, config_dir })
    }

    /// Resolve every configured sheet to absolute-or-relative-to-cwd paths.
    pub fn resolve_sheets(&self) -> Vec<SheetSource> {
        self.config
            .sheets
            .iter()
            .map(|sheet| {
                let mut source = SheetSource::new(
                    self.config_dir.join(&sheet.manifest),
                    self.config_dir.join(&sheet.image),
                );
                if let Some(name) = &sheet.name {
                    source.name = name.clone();
                }
                source
            })
            .collect()
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }
}
