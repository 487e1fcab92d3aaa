use std::fmt;

/// One `SubTexture` record, still in top-left-origin sheet space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAtlasEntry {
    /// Sprite name, never blank
    pub name: String,
    /// Left edge in sheet pixels
    pub offset_x: i32,
    /// Top edge in sheet pixels (measured from the top of the image)
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Attributes read from each `SubTexture` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestField {
    Name,
    X,
    Y,
    Width,
    Height,
}

impl ManifestField {
    /// The XML attribute name for this field
    pub fn attribute(self) -> &'static str {
        match self {
            ManifestField::Name => "name",
            ManifestField::X => "x",
            ManifestField::Y => "y",
            ManifestField::Width => "width",
            ManifestField::Height => "height",
        }
    }
}

impl fmt::Display for ManifestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}
