mod importer;
mod loader;

pub use importer::{DEFAULT_MAX_SIZE, SheetImporter};
pub use loader::{SheetSource, import_sheet, import_sheets, load_manifest};

use crate::atlas::MaxSizeCheck;
use crate::sprite::{ImageSize, SpriteRect};

/// Sprite rects and texture settings produced from one sheet
#[derive(Debug, Clone)]
pub struct SlicedSheet {
    /// Dimensions of the sheet image
    pub image: ImageSize,
    /// Sprites in manifest order, in bottom-left-origin space
    pub sprites: Vec<SpriteRect>,
    /// Configured vs. recommended texture max size
    pub max_size: MaxSizeCheck,
    /// Max size the sheet should be imported with
    pub applied_max_size: u32,
}
