use serde::{Deserialize, Serialize};

use crate::import::DEFAULT_MAX_SIZE;

/// One manifest/image pair listed in a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Path to the XML atlas manifest
    pub manifest: String,
    /// Path to the sheet image the manifest describes
    pub image: String,
    /// Base name for the output file (defaults to the manifest file stem)
    #[serde(default)]
    pub name: Option<String>,
}

/// Sheetslice configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sheets to import
    pub sheets: Vec<SheetConfig>,
    /// Output directory for metadata files
    pub output_dir: String,
    /// Max size currently configured for the sheet textures
    pub max_size: u32,
    /// Replace a non-optimal max size with the recommended one
    pub fix_max_size: bool,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sheets: Vec::new(),
            output_dir: ".".to_string(),
            max_size: DEFAULT_MAX_SIZE,
            fix_max_size: false,
        }
    }
}
