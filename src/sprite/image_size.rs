use std::path::Path;

use crate::error::SliceError;

/// Pixel dimensions of a sheet image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The larger of width and height
    pub fn longest_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Read image dimensions from the file header without decoding pixels
pub fn read_image_size(path: &Path) -> Result<ImageSize, SliceError> {
    if !path.exists() {
        return Err(SliceError::InputNotFound(path.to_path_buf()));
    }

    let (width, height) = image::image_dimensions(path).map_err(|e| SliceError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ImageSize { width, height })
}
