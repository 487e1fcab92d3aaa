use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::error::SliceError;
use crate::import::SlicedSheet;
use crate::sprite::{Pivot, SpriteRect};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput {
    meta: Meta,
    image: String,
    size: Size,
    max_size: u32,
    recommended_max_size: u32,
    sprites: Vec<JsonSprite>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
    origin: &'static str,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct JsonSprite {
    name: String,
    rect: Frame,
    pivot: Pivot,
}

#[derive(Serialize)]
struct Frame {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

/// Write sprite metadata for one sheet to `<output_dir>/<base_name>.json`.
///
/// Returns the path of the written file.
pub fn write_json(
    sheet: &SlicedSheet,
    image_path: &Path,
    output_dir: &Path,
    base_name: &str,
) -> Result<PathBuf> {
    let output = JsonOutput {
        meta: Meta {
            app: "sheetslice",
            version: env!("CARGO_PKG_VERSION"),
            origin: "bottom-left",
        },
        image: make_relative(image_path, output_dir),
        size: Size {
            w: sheet.image.width,
            h: sheet.image.height,
        },
        max_size: sheet.applied_max_size,
        recommended_max_size: sheet.max_size.recommended,
        sprites: sheet.sprites.iter().map(sprite_to_json).collect(),
    };

    let json_path = output_dir.join(format!("{}.json", base_name));
    let content = serde_json::to_string_pretty(&output)?;

    fs::write(&json_path, content).map_err(|e| SliceError::OutputWrite {
        path: json_path.clone(),
        source: e,
    })?;

    Ok(json_path)
}

fn sprite_to_json(sprite: &SpriteRect) -> JsonSprite {
    JsonSprite {
        name: sprite.name.clone(),
        rect: Frame {
            x: sprite.rect.x,
            y: sprite.rect.y,
            w: sprite.rect.width,
            h: sprite.rect.height,
        },
        pivot: sprite.pivot,
    }
}

/// Path of `path` as seen from the `base` directory.
///
/// Both paths are canonicalized first so the result resolves from the
/// written file rather than from the working directory. A path outside
/// `base` (or on another drive on Windows) is written in absolute form;
/// paths that cannot be canonicalized are used as given.
fn make_relative(path: &Path, base: &Path) -> String {
    let path = fs::canonicalize(path).unwrap_or_else(|_e| path.to_path_buf());
    let base = fs::canonicalize(base).unwrap_or_else(|_e| base.to_path_buf());

    if let Ok(relative) = path.strip_prefix(&base) {
        relative.to_string_lossy().into_owned()
    } else {
        path.to_string_lossy().into_owned()
    }
}
