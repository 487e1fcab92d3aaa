use log::{debug, info, warn};

use super::SlicedSheet;
use crate::atlas::{MaxSizeCheck, recommend_max_size};
use crate::error::SliceError;
use crate::manifest::parse_manifest;
use crate::sprite::{ImageSize, remap_all};

/// Max size assumed when none is configured
pub const DEFAULT_MAX_SIZE: u32 = 2048;

/// Settings for turning a manifest and its image into sprite rects
#[derive(Debug, Clone, Copy)]
pub struct SheetImporter {
    /// Max size currently configured for the sheet texture
    pub max_size: u32,
    /// Replace a non-optimal max size with the recommended one
    pub fix_max_size: bool,
}

impl Default for SheetImporter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

impl SheetImporter {
    pub fn new(max_size: u32) -> Self {
        Self {
            max_size,
            fix_max_size: false,
        }
    }

    pub fn fix_max_size(mut self, fix: bool) -> Self {
        self.fix_max_size = fix;
        self
    }

    /// Parse `document`, remap every entry against `image`, and check the
    /// configured max size against the smallest bound that fits the image.
    pub fn import(&self, document: &str, image: ImageSize) -> Result<SlicedSheet, SliceError> {
        let entries = parse_manifest(document)?;
        debug!("Parsed {} SubTexture entries", entries.len());

        let sprites = remap_all(entries, i64::from(image.height));
        let degenerate = sprites.iter().filter(|s| s.rect.is_degenerate()).count();
        if degenerate > 0 {
            debug!("{} sprite(s) have an empty rect", degenerate);
        }

        let recommended = recommend_max_size(image.longest_side())?;
        let check = MaxSizeCheck {
            current: self.max_size,
            recommended,
        };

        if check.is_too_small() {
            warn!(
                "Max size {} is smaller than the {}x{} image; sprite rects will be misplaced \
                 unless it is raised to {}",
                check.current, image.width, image.height, check.recommended
            );
        }

        let applied_max_size = if check.is_optimal() {
            check.current
        } else if self.fix_max_size {
            info!(
                "Max size {} is not optimal, using {} instead",
                check.current, check.recommended
            );
            check.recommended
        } else {
            info!(
                "Max size {} is not optimal for a {}x{} image (optimal: {})",
                check.current, image.width, image.height, check.recommended
            );
            check.current
        };

        Ok(SlicedSheet {
            image,
            sprites,
            max_size: check,
            applied_max_size,
        })
    }
}
