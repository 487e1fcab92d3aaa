use std::collections::HashMap;

use roxmltree::{Document, Node, ParsingOptions};

use super::{ManifestField, SpriteAtlasEntry};
use crate::error::SliceError;

/// Root element of an Animate/Starling atlas manifest
pub const ROOT_TAG: &str = "TextureAtlas";
/// Element describing a single sprite
pub const ENTRY_TAG: &str = "SubTexture";

/// Parse an atlas manifest into sprite entries, in document order.
///
/// Only `SubTexture` elements that are direct children of a `TextureAtlas`
/// root are read. Validation is all-or-nothing: the first missing or
/// malformed attribute aborts the parse and is returned with the index of
/// the offending element.
pub fn parse_manifest(document: &str) -> Result<Vec<SpriteAtlasEntry>, SliceError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(document, options).map_err(|e| {
        SliceError::MalformedDocument {
            message: e.to_string(),
        }
    })?;

    let root = doc.root_element();
    if !root.has_tag_name(ROOT_TAG) {
        return Ok(Vec::new());
    }

    root.children()
        .filter(|node| node.is_element() && node.has_tag_name(ENTRY_TAG))
        .enumerate()
        .map(|(index, node)| parse_entry(index, node))
        .collect()
}

fn parse_entry(index: usize, node: Node<'_, '_>) -> Result<SpriteAtlasEntry, SliceError> {
    let attrs: HashMap<&str, &str> = node
        .attributes()
        .filter(|attr| attr.namespace().is_none())
        .map(|attr| (attr.name(), attr.value()))
        .collect();

    let require = |field: ManifestField| {
        attrs
            .get(field.attribute())
            .copied()
            .ok_or(SliceError::MissingField { field, index })
    };

    let name = require(ManifestField::Name)?;
    if name.trim().is_empty() {
        return Err(SliceError::InvalidField {
            field: ManifestField::Name,
            index,
        });
    }

    // Each pair is checked for presence before either member is parsed.
    let (raw_x, raw_y) = (require(ManifestField::X)?, require(ManifestField::Y)?);
    let offset_x = parse_int(raw_x, ManifestField::X, index)?;
    let offset_y = parse_int(raw_y, ManifestField::Y, index)?;

    let (raw_w, raw_h) = (
        require(ManifestField::Width)?,
        require(ManifestField::Height)?,
    );
    let width = parse_int(raw_w, ManifestField::Width, index)?;
    let height = parse_int(raw_h, ManifestField::Height, index)?;

    Ok(SpriteAtlasEntry {
        name: name.to_string(),
        offset_x,
        offset_y,
        width,
        height,
    })
}

/// Base-10 integer with optional sign and surrounding ASCII whitespace
fn parse_int(raw: &str, field: ManifestField, index: usize) -> Result<i32, SliceError> {
    raw.trim_matches(|c: char| c == ' ' || ('\t'..='\r').contains(&c))
        .parse::<i32>()
        .map_err(|_e| SliceError::InvalidField { field, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(attrs: &str) -> String {
        format!("<SubTexture {} />", attrs)
    }

    fn atlas(children: &[String]) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<TextureAtlas imagePath="sheet.png">
{}
</TextureAtlas>"#,
            children.join("\n")
        )
    }

    const VALID: &str = r#"name="idle0000" x="0" y="0" width="100" height="120""#;

    #[test]
    fn test_parse_entries_in_document_order() {
        let doc = atlas(&[
            sub(VALID),
            sub(r#"name="idle0001" x="100" y="0" width="100" height="120" frameX="-2""#),
            sub(r#"name="run0000" x="0" y="120" width="64" height="64" rotated="true""#),
        ]);

        let entries = parse_manifest(&doc).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "idle0000");
        assert_eq!(entries[1].name, "idle0001");
        assert_eq!(entries[1].offset_x, 100);
        assert_eq!(
            entries[2],
            SpriteAtlasEntry {
                name: "run0000".to_string(),
                offset_x: 0,
                offset_y: 120,
                width: 64,
                height: 64,
            }
        );
    }

    #[test]
    fn test_empty_atlas() {
        let entries = parse_manifest("<TextureAtlas></TextureAtlas>").unwrap();
        assert!(entries.is_empty());

        let entries = parse_manifest("<TextureAtlas><Other/></TextureAtlas>").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_other_root_yields_nothing() {
        let doc = format!("<Atlas>{}</Atlas>", sub(VALID));
        assert!(parse_manifest(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_nested_entries_are_ignored() {
        let doc = atlas(&[
            sub(VALID),
            format!("<Group>{}</Group>", sub(r#"name="nested""#)),
        ]);

        let entries = parse_manifest(&doc).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "idle0000");
    }

    #[test]
    fn test_duplicate_names_pass_through() {
        let doc = atlas(&[sub(VALID), sub(VALID)]);
        let entries = parse_manifest(&doc).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_manifest("<TextureAtlas><SubTexture name=\"a\"></TextureAtlas>")
            .unwrap_err();
        match err {
            SliceError::MalformedDocument { message } => assert!(!message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_width_stops_at_first_entry() {
        let doc = atlas(&[
            sub(r#"name="a" x="0" y="0" width="abc" height="10""#),
            sub(r#"name="b""#),
        ]);

        let err = parse_manifest(&doc).unwrap_err();
        assert!(matches!(
            err,
            SliceError::InvalidField {
                field: ManifestField::Width,
                index: 0
            }
        ));
    }

    #[test]
    fn test_missing_y_on_second_entry() {
        let doc = atlas(&[
            sub(VALID),
            sub(r#"name="b" x="0" width="10" height="10""#),
        ]);

        let err = parse_manifest(&doc).unwrap_err();
        assert!(matches!(
            err,
            SliceError::MissingField {
                field: ManifestField::Y,
                index: 1
            }
        ));
    }

    #[test]
    fn test_doctype_is_allowed() {
        let doc = format!(
            "<!DOCTYPE TextureAtlas>\n<TextureAtlas>{}</TextureAtlas>",
            sub(VALID)
        );
        assert_eq!(parse_manifest(&doc).unwrap().len(), 1);
    }

    #[test]
    fn test_namespaced_attributes_are_ignored() {
        let doc = |attrs: &str| {
            format!(
                r#"<TextureAtlas xmlns:k="urn:k"><SubTexture {} /></TextureAtlas>"#,
                attrs
            )
        };

        // Only a prefixed name: the plain attribute is still missing
        let err = parse_manifest(&doc(r#"k:name="a" x="0" y="0" width="1" height="1""#))
            .unwrap_err();
        assert!(matches!(
            err,
            SliceError::MissingField {
                field: ManifestField::Name,
                index: 0
            }
        ));

        // A blank prefixed name does not shadow the real one
        let entries =
            parse_manifest(&doc(r#"name="a" k:name=" " x="0" y="0" width="1" height="1""#))
                .unwrap();
        assert_eq!(entries[0].name, "a");

        // Same for numeric fields
        let entries =
            parse_manifest(&doc(r#"name="a" x="5" k:x="zz" y="0" width="1" height="1""#))
                .unwrap();
        assert_eq!(entries[0].offset_x, 5);
    }

    #[test]
    fn test_name_validation() {
        let doc = atlas(&[sub(r#"x="0" y="0" width="1" height="1""#)]);
        assert!(matches!(
            parse_manifest(&doc).unwrap_err(),
            SliceError::MissingField {
                field: ManifestField::Name,
                index: 0
            }
        ));

        let doc = atlas(&[sub(r#"name="  " x="0" y="0" width="1" height="1""#)]);
        assert!(matches!(
            parse_manifest(&doc).unwrap_err(),
            SliceError::InvalidField {
                field: ManifestField::Name,
                index: 0
            }
        ));
    }

    #[test]
    fn test_name_is_kept_verbatim() {
        let doc = atlas(&[sub(r#"name=" walk 01" x="0" y="0" width="1" height="1""#)]);
        assert_eq!(parse_manifest(&doc).unwrap()[0].name, " walk 01");
    }

    #[test]
    fn test_presence_checked_before_parsing() {
        // Missing both x and width: x is reported first
        let doc = atlas(&[sub(r#"name="a" y="0" height="1""#)]);
        assert!(matches!(
            parse_manifest(&doc).unwrap_err(),
            SliceError::MissingField {
                field: ManifestField::X,
                ..
            }
        ));

        // Malformed x but missing y: the missing y wins
        let doc = atlas(&[sub(r#"name="a" x="zz" width="1" height="1""#)]);
        assert!(matches!(
            parse_manifest(&doc).unwrap_err(),
            SliceError::MissingField {
                field: ManifestField::Y,
                ..
            }
        ));

        // Malformed height but missing width: the missing width wins
        let doc = atlas(&[sub(r#"name="a" x="0" y="0" height="??""#)]);
        assert!(matches!(
            parse_manifest(&doc).unwrap_err(),
            SliceError::MissingField {
                field: ManifestField::Width,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_and_zero_values_accepted() {
        let doc = atlas(&[sub(r#"name="a" x="-4" y="+2" width="0" height="-1""#)]);
        let entry = &parse_manifest(&doc).unwrap()[0];
        assert_eq!(entry.offset_x, -4);
        assert_eq!(entry.offset_y, 2);
        assert_eq!(entry.width, 0);
        assert_eq!(entry.height, -1);
    }

    #[test]
    fn test_integer_syntax() {
        assert_eq!(parse_int(" 42 ", ManifestField::X, 0).unwrap(), 42);
        assert_eq!(parse_int("-7", ManifestField::X, 0).unwrap(), -7);

        for bad in ["", " ", "1.5", "0x10", "1e3", "12px", "99999999999"] {
            assert!(
                matches!(
                    parse_int(bad, ManifestField::Height, 3),
                    Err(SliceError::InvalidField {
                        field: ManifestField::Height,
                        index: 3
                    })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        let err = SliceError::MissingField {
            field: ManifestField::Height,
            index: 4,
        };
        assert_eq!(err.to_string(), "Missing 'height' attribute on SubTexture 4");
    }
}
