//! Round-trip tests: a forward token build feeding the reverse pipeline
//! through real files.

use crate::figma::DocumentNode;
use crate::generate::{component_scss, LookupMaps};
use crate::lookup::load_lookup;
use crate::resolve::resolve;
use std::path::Path;
use tokenbridge_common::RealFileSystem;
use tokenbridge_tokens::{build, BuildOptions, UnitConversion};

const SOURCE: &str = r#"{
    "Theme": {
        "Mode": {
            "spacing": {
                "sm": { "$value": "4px", "$type": "dimension" },
                "md": { "$value": "8px", "$type": "dimension" }
            },
            "radius": {
                "base": { "$value": "2px", "$type": "dimension" }
            }
        }
    }
}"#;

#[test]
fn test_build_then_resolve_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let fs = RealFileSystem;

    let source_path = dir.path().join("tokens.json");
    std::fs::write(&source_path, SOURCE).unwrap();

    let options = BuildOptions {
        conversion: UnitConversion::None,
        ..Default::default()
    };
    let build_dir = dir.path().join("generated");
    build(&fs, &source_path, &build_dir, &options).unwrap();

    let map = load_lookup(&fs, &build_dir.join("_tokens.scss"));
    assert_eq!(resolve(Some(4.0), &map), "$spacing-sm");
    assert_eq!(resolve(Some(4.4), &map), "$spacing-sm");
    assert_eq!(resolve(Some(7.0), &map), "7px");
    assert_eq!(resolve(None, &map), "0px");
}

#[test]
fn test_split_build_feeds_component_generation() {
    let dir = tempfile::tempdir().unwrap();
    let fs = RealFileSystem;

    let source_path = dir.path().join("tokens.json");
    std::fs::write(&source_path, SOURCE).unwrap();

    let options = BuildOptions {
        conversion: UnitConversion::None,
        split_by_category: true,
        ..Default::default()
    };
    let build_dir = dir.path().join("generated");
    build(&fs, &source_path, &build_dir, &options).unwrap();

    let maps = LookupMaps::load(&fs, &build_dir, true);
    let node = DocumentNode {
        id: "1:2".to_string(),
        name: "Button".to_string(),
        node_type: Some("COMPONENT".to_string()),
        padding_top: Some(4.0),
        padding_right: Some(8.0),
        padding_bottom: Some(4.0),
        padding_left: Some(8.0),
        corner_radius: Some(2.0),
        ..Default::default()
    };

    let scss = component_scss(&node, &maps);
    assert!(scss.contains("padding: $spacing-sm $spacing-md $spacing-sm $spacing-md;"));
    assert!(scss.contains("border-radius: $radius-base;"));
}

#[test]
fn test_resolver_degrades_without_forward_build() {
    let dir = tempfile::tempdir().unwrap();
    let fs = RealFileSystem;

    // No build has run; the map is empty and everything resolves to literals
    let map = load_lookup(&fs, &dir.path().join("_tokens.scss"));
    assert!(map.is_empty());
    assert_eq!(resolve(Some(4.0), &map), "4px");
}
