use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;

use super::{SheetImporter, SlicedSheet};
use crate::error::SliceError;
use crate::sprite::read_image_size;

/// A manifest and the sheet image it describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    /// Base name for output files
    pub name: String,
    pub manifest: PathBuf,
    pub image: PathBuf,
}

impl SheetSource {
    /// Create a source named after the manifest's file stem
    pub fn new(manifest: PathBuf, image: PathBuf) -> Self {
        let name = manifest
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sheet")
            .to_string();

        Self {
            name,
            manifest,
            image,
        }
    }
}

/// Read a manifest file into memory
pub fn load_manifest(path: &Path) -> Result<String, SliceError> {
    if !path.exists() {
        return Err(SliceError::InputNotFound(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|e| SliceError::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and import a single sheet
pub fn import_sheet(source: &SheetSource, importer: &SheetImporter) -> Result<SlicedSheet> {
    let document = load_manifest(&source.manifest)?;
    let image = read_image_size(&source.image)?;
    debug!(
        "{}: image {}x{}",
        source.image.display(),
        image.width,
        image.height
    );

    let sheet = importer
        .import(&document, image)
        .with_context(|| format!("failed to import {}", source.manifest.display()))?;

    info!(
        "Sliced {} sprites from {}",
        sheet.sprites.len(),
        source.manifest.display()
    );

    Ok(sheet)
}

/// Import several sheets in parallel, returning results in input order
pub fn import_sheets(
    sources: &[SheetSource],
    importer: &SheetImporter,
) -> Result<Vec<SlicedSheet>> {
    info!("Importing {} sheet(s)...", sources.len());

    sources
        .par_iter()
        .map(|source| import_sheet(source, importer))
        .collect()
}
