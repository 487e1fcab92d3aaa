pub mod atlas;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod manifest;
pub mod output;
pub mod sprite;

pub use atlas::{MaxSizeCheck, recommend_max_size};
pub use cli::{CliArgs, Command, RecommendArgs, SliceArgs};
pub use error::SliceError;
pub use import::{SheetImporter, SheetSource, SlicedSheet};
pub use manifest::{ManifestField, SpriteAtlasEntry, parse_manifest};
pub use sprite::{ImageSize, Pivot, Rect, SpriteRect, remap, remap_all};
