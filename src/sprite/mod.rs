mod image_size;
mod rect;
mod remap;

pub use image_size::{ImageSize, read_image_size};
pub use rect::{Pivot, Rect, SpriteRect};
pub use remap::{remap, remap_all};
