use crate::error::SliceError;

/// Texture max-size values an import pipeline accepts, smallest first
pub const MAX_SIZE_CANDIDATES: [u32; 10] = [32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384];

/// Largest max size that can be recommended
pub const LARGEST_MAX_SIZE: u32 = MAX_SIZE_CANDIDATES[MAX_SIZE_CANDIDATES.len() - 1];

/// Smallest candidate max size that holds `dimension` pixels.
///
/// Call with the longest side of the sheet image. Dimensions above
/// [`LARGEST_MAX_SIZE`] have no valid bound and are rejected.
pub fn recommend_max_size(dimension: u32) -> Result<u32, SliceError> {
    MAX_SIZE_CANDIDATES
        .iter()
        .copied()
        .find(|&candidate| candidate >= dimension)
        .ok_or(SliceError::OutOfRange {
            dimension,
            max: LARGEST_MAX_SIZE,
        })
}

/// Comparison of a configured texture max size against the optimal one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSizeCheck {
    /// Max size currently configured for the texture
    pub current: u32,
    /// Smallest max size that fits the image
    pub recommended: u32,
}

impl MaxSizeCheck {
    /// Returns true if the configured value is already the recommended one
    pub fn is_optimal(&self) -> bool {
        self.current == self.recommended
    }

    /// Returns true if the configured value is too small to hold the image.
    ///
    /// A downscaled texture no longer matches the manifest's pixel space,
    /// so every rect would land in the wrong place.
    pub fn is_too_small(&self) -> bool {
        self.current < self.recommended
    }
}
