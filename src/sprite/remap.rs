use super::{Pivot, Rect, SpriteRect};
use crate::manifest::SpriteAtlasEntry;

/// Convert a top-left-origin manifest entry into a bottom-left-origin rect.
///
/// `image_height` must be the real pixel height of the sheet. No bounds
/// checking is done, so entries hanging past the top of the image get a
/// negative `y`.
pub fn remap(entry: SpriteAtlasEntry, image_height: i64) -> SpriteRect {
    let y = image_height - (i64::from(entry.offset_y) + i64::from(entry.height));

    SpriteRect {
        name: entry.name,
        rect: Rect::new(
            i64::from(entry.offset_x),
            y,
            i64::from(entry.width),
            i64::from(entry.height),
        ),
        pivot: Pivot::CENTER,
    }
}

/// Remap every entry against the same sheet height, keeping order
pub fn remap_all(entries: Vec<SpriteAtlasEntry>, image_height: i64) -> Vec<SpriteRect> {
    entries
        .into_iter()
        .map(|entry| remap(entry, image_height))
        .collect()
}
