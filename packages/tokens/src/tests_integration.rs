//! Whole-pipeline tests: source text in, emitted declaration files out.

use crate::emit::{build, BuildOptions};
use crate::units::UnitConversion;
use std::path::Path;
use tokenbridge_common::{FileSystem, MockFileSystem};

const SOURCE: &str = r##"{
    "TokenTest": {
        "Mode 1": {
            "spacing": {
                "sm": { "$value": "4px", "$type": "dimension" },
                "md": { "$value": "8px", "$type": "dimension" },
                "2xl": { "$value": "40px", "$type": "dimension" }
            },
            "radius": {
                "base": { "value": "2px", "type": "dimension" }
            },
            "color": {
                "primary": { "$value": "#3366FF", "$type": "color" }
            }
        }
    }
}"##;

fn fixture_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("/proj/tokens.json", SOURCE);
    fs
}

#[test]
fn test_consolidated_build_end_to_end() {
    let fs = fixture_fs();
    let options = BuildOptions {
        conversion: UnitConversion::None,
        ..Default::default()
    };

    build(&fs, Path::new("/proj/tokens.json"), Path::new("/out"), &options).unwrap();

    let contents = fs.file_contents(Path::new("/out/_tokens.scss")).unwrap();
    assert_eq!(
        contents,
        "$spacing-sm: 4px;\n\
         $spacing-md: 8px;\n\
         $spacing-2xl: 40px;\n\
         $radius-base: 2px;\n\
         $color-primary: #3366FF;\n"
    );
}

#[test]
fn test_partitioned_build_covers_every_category() {
    let fs = fixture_fs();
    let options = BuildOptions {
        conversion: UnitConversion::None,
        split_by_category: true,
        ..Default::default()
    };

    let written = build(&fs, Path::new("/proj/tokens.json"), Path::new("/out"), &options).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["_spacing.scss", "_radius.scss", "_color.scss"]);

    // Union of the partition files equals the consolidated declaration set
    let total: usize = written
        .iter()
        .map(|p| fs.read_to_string(p).unwrap().lines().count())
        .sum();
    assert_eq!(total, 5);
}

#[test]
fn test_rem_conversion_end_to_end() {
    let fs = fixture_fs();
    let options = BuildOptions::default(); // px-to-rem, base 16

    build(&fs, Path::new("/proj/tokens.json"), Path::new("/out"), &options).unwrap();

    let contents = fs.file_contents(Path::new("/out/_tokens.scss")).unwrap();
    assert!(contents.contains("$spacing-sm: 0.25rem;"));
    assert!(contents.contains("$spacing-md: 0.5rem;"));
    // Colors are never unit-converted
    assert!(contents.contains("$color-primary: #3366FF;"));
}
