//! Variable emission - renders flattened tokens as stylesheet declarations
//! and writes the output file layout.
//!
//! The declaration shape `$name: value;` is round-trip critical: the sync
//! side parses emitted files back into lookup maps, so any formatting
//! change here must stay parseable there.

use crate::error::{TokenError, TokenResult};
use crate::name::flat_name;
use crate::partition::{partition, EmittedVariable};
use crate::source::{parse_source, SourceShape, TokenLeaf};
use crate::units::{convert_leaf_value, UnitConversion, DEFAULT_REM_BASE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokenbridge_common::FileSystem;

/// Reserved sigil that opens every emitted declaration
pub const DECLARATION_SIGIL: char = '$';

/// File name used when output is not split by category
pub const CONSOLIDATED_FILE: &str = "_tokens.scss";

/// What to do when two leaves collapse to the same variable name within
/// one emitted file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Keep the later value (matches the historical behavior), with a warning
    Overwrite,
    /// Fail the run on the first duplicate
    Reject,
    /// Disambiguate deterministically by appending `-2`, `-3`, ...
    Suffix,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        ConflictPolicy::Overwrite
    }
}

/// Options for one forward build pass
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub shape: SourceShape,
    pub conversion: UnitConversion,
    pub rem_base: f64,
    pub split_by_category: bool,
    pub conflict_policy: ConflictPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            shape: SourceShape::default(),
            conversion: UnitConversion::default(),
            rem_base: DEFAULT_REM_BASE,
            split_by_category: false,
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

/// Flatten leaves into emitted variables: collapse + normalize the name,
/// convert the value, record the category segment
pub fn flatten(leaves: &[TokenLeaf], options: &BuildOptions) -> Vec<EmittedVariable> {
    leaves
        .iter()
        .map(|leaf| EmittedVariable {
            name: flat_name(&leaf.path, options.shape.prefix_segments),
            value: convert_leaf_value(leaf, options.conversion, options.rem_base),
            category: leaf.category(&options.shape).map(str::to_string),
        })
        .collect()
}

/// Render variables as declaration lines, applying the conflict policy so
/// names are unique within the returned text
pub fn render_declarations(
    variables: &[EmittedVariable],
    policy: ConflictPolicy,
) -> TokenResult<String> {
    let unique = apply_conflict_policy(variables, policy)?;

    let mut out = String::new();
    for variable in &unique {
        out.push(DECLARATION_SIGIL);
        out.push_str(&variable.name);
        out.push_str(": ");
        out.push_str(&variable.value);
        out.push_str(";\n");
    }
    Ok(out)
}

fn apply_conflict_policy(
    variables: &[EmittedVariable],
    policy: ConflictPolicy,
) -> TokenResult<Vec<EmittedVariable>> {
    let mut unique: Vec<EmittedVariable> = Vec::with_capacity(variables.len());

    for variable in variables {
        match unique.iter().position(|v| v.name == variable.name) {
            None => unique.push(variable.clone()),
            Some(index) => match policy {
                ConflictPolicy::Overwrite => {
                    tracing::warn!(
                        name = %variable.name,
                        old = %unique[index].value,
                        new = %variable.value,
                        "duplicate variable name, later value wins"
                    );
                    unique[index].value = variable.value.clone();
                }
                ConflictPolicy::Reject => {
                    return Err(TokenError::duplicate_name(&variable.name));
                }
                ConflictPolicy::Suffix => {
                    let mut n = 2;
                    let mut candidate = format!("{}-{}", variable.name, n);
                    while unique.iter().any(|v| v.name == candidate) {
                        n += 1;
                        candidate = format!("{}-{}", variable.name, n);
                    }
                    let mut renamed = variable.clone();
                    renamed.name = candidate;
                    unique.push(renamed);
                }
            },
        }
    }

    Ok(unique)
}

/// Output file name for one category partition
pub fn partition_file_name(label: &str) -> String {
    format!("_{}.scss", label)
}

/// Run one full forward pass: read the source, flatten, and write either
/// one consolidated file or one file per discovered category. Returns the
/// written paths.
pub fn build(
    fs: &dyn FileSystem,
    source_path: &Path,
    build_dir: &Path,
    options: &BuildOptions,
) -> TokenResult<Vec<PathBuf>> {
    if !fs.exists(source_path) {
        return Err(TokenError::source_not_found(source_path.display().to_string()));
    }

    let text = fs.read_to_string(source_path)?;
    let leaves = parse_source(&text, &options.shape)?;
    let variables = flatten(&leaves, options);

    fs.ensure_dir(build_dir)?;

    let mut written = Vec::new();
    if options.split_by_category {
        for group in partition(variables) {
            let path = build_dir.join(partition_file_name(&group.label));
            let text = render_declarations(&group.variables, options.conflict_policy)?;
            fs.write(&path, &text)?;
            written.push(path);
        }
    } else {
        let path = build_dir.join(CONSOLIDATED_FILE);
        let text = render_declarations(&variables, options.conflict_policy)?;
        fs.write(&path, &text)?;
        written.push(path);
    }

    Ok(written)
}
