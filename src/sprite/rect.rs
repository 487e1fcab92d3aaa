use serde::Serialize;

/// A rectangle in bottom-left-origin texture space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the rectangle has no area
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Normalized pivot point within a sprite rect
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    pub const CENTER: Pivot = Pivot { x: 0.5, y: 0.5 };
}

/// A named sprite ready to be sliced out of the sheet texture
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRect {
    pub name: String,
    pub rect: Rect,
    pub pivot: Pivot,
}
