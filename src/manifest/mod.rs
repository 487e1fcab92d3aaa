mod entry;
mod parser;

pub use entry::{ManifestField, SpriteAtlasEntry};
pub use parser::{ENTRY_TAG, ROOT_TAG, parse_manifest};
