use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::ManifestField;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("Failed to parse atlas manifest: {message}")]
    MalformedDocument { message: String },

    #[error("Missing '{field}' attribute on SubTexture {index}")]
    MissingField { field: ManifestField, index: usize },

    #[error("Malformed '{field}' attribute on SubTexture {index}")]
    InvalidField { field: ManifestField, index: usize },

    #[error("Dimension {dimension} exceeds the largest supported max size ({max})")]
    OutOfRange { dimension: u32, max: u32 },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read image size '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
