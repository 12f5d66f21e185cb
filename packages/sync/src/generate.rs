//! Component stylesheet generation - turns measurements taken from a
//! document node into an SCSS rule block whose values reference declared
//! tokens wherever one matches.

use crate::figma::DocumentNode;
use crate::lookup::{load_lookup, ReverseLookupMap};
use crate::resolve::resolve;
use crate::SyncResult;
use std::path::{Path, PathBuf};
use tokenbridge_common::FileSystem;

const SPACING_FILE: &str = "_spacing.scss";
const RADIUS_FILE: &str = "_radius.scss";
const CONSOLIDATED_FILE: &str = "_tokens.scss";

/// Reverse lookup maps for the measurement kinds the generator resolves:
/// paddings and gaps against spacing tokens, corner radius against radius
/// tokens
#[derive(Debug, Default)]
pub struct LookupMaps {
    pub spacing: ReverseLookupMap,
    pub radius: ReverseLookupMap,
}

impl LookupMaps {
    /// Load the maps from a previous forward build. With category splitting
    /// the per-category files are used; otherwise both maps come from the
    /// consolidated file. Missing files degrade to empty maps.
    pub fn load(fs: &dyn FileSystem, build_dir: &Path, split_by_category: bool) -> Self {
        if split_by_category {
            Self {
                spacing: load_lookup(fs, &build_dir.join(SPACING_FILE)),
                radius: load_lookup(fs, &build_dir.join(RADIUS_FILE)),
            }
        } else {
            let consolidated = load_lookup(fs, &build_dir.join(CONSOLIDATED_FILE));
            Self {
                spacing: consolidated.clone(),
                radius: consolidated,
            }
        }
    }
}

/// Strip everything but alphanumeric characters from a component name, for
/// use as a directory and file name
pub fn sanitize_component_name(name: &str) -> String {
    let sanitized: String = name.chars().filter(|c| c.is_alphanumeric()).collect();
    if sanitized.is_empty() {
        "Component".to_string()
    } else {
        sanitized
    }
}

/// Generate the SCSS rule block for one component node. Every measurement
/// goes through reverse resolution, so generated styles reference tokens
/// instead of raw literals whenever a token declared the value.
pub fn component_scss(node: &DocumentNode, maps: &LookupMaps) -> String {
    let class = sanitize_component_name(&node.name).to_lowercase();

    let padding = format!(
        "{} {} {} {}",
        resolve(node.padding_top, &maps.spacing),
        resolve(node.padding_right, &maps.spacing),
        resolve(node.padding_bottom, &maps.spacing),
        resolve(node.padding_left, &maps.spacing),
    );
    let gap = resolve(node.item_spacing, &maps.spacing);
    let radius = resolve(node.corner_radius, &maps.radius);

    format!(
        "// Generated from the design document ({name}). Do not edit by hand.\n\
         .{class} {{\n\
         \x20 padding: {padding};\n\
         \x20 gap: {gap};\n\
         \x20 border-radius: {radius};\n\
         \x20 display: inline-flex;\n\
         \x20 align-items: center;\n\
         \x20 justify-content: center;\n\
         \x20 border: none;\n\
         \x20 cursor: pointer;\n\
         }}\n",
        name = node.name,
        class = class,
        padding = padding,
        gap = gap,
        radius = radius,
    )
}

/// Write the generated stylesheet under
/// `<components_dir>/<Sanitized>/<Sanitized>.scss`, creating the directory
/// when needed. Returns the written path.
pub fn write_component_scss(
    fs: &dyn FileSystem,
    components_dir: &Path,
    node: &DocumentNode,
    maps: &LookupMaps,
) -> SyncResult<PathBuf> {
    let sanitized = sanitize_component_name(&node.name);
    let dir = components_dir.join(&sanitized);
    fs.ensure_dir(&dir)?;

    let path = dir.join(format!("{}.scss", sanitized));
    fs.write(&path, &component_scss(node, maps))?;
    Ok(path)
}
