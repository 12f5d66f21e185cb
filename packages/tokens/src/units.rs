//! Unit conversion for dimension tokens.
//!
//! Conversion is best-effort: values that already carry the target unit,
//! values that aren't numeric, and leaves that aren't size-like all pass
//! through untouched.

use crate::source::{TokenKind, TokenLeaf};
use serde::{Deserialize, Serialize};

/// Base font size assumed when translating between px and rem
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// Path segments that mark a leaf as size-like even without an explicit
/// dimension type tag
const SIZE_HINTS: &[&str] = &[
    "size", "sizes", "spacing", "space", "gap", "radius", "width", "height",
];

/// Direction of unit normalization applied to dimension tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitConversion {
    PxToRem,
    RemToPx,
    None,
}

impl Default for UnitConversion {
    fn default() -> Self {
        UnitConversion::PxToRem
    }
}

/// Whether a leaf is eligible for unit conversion: tagged as a dimension,
/// or carrying a size-indicating path segment
pub fn is_size_like(leaf: &TokenLeaf) -> bool {
    if leaf.kind == TokenKind::Dimension {
        return true;
    }
    leaf.path
        .iter()
        .any(|segment| SIZE_HINTS.contains(&segment.to_lowercase().as_str()))
}

/// Convert a single value string in the given direction.
///
/// Values already carrying the target unit suffix are returned unchanged,
/// so repeated conversion in the same direction cannot double-convert.
/// Bare numbers are assumed to be in the source unit of the direction.
pub fn convert_value(value: &str, direction: UnitConversion, base: f64) -> String {
    let trimmed = value.trim();

    match direction {
        UnitConversion::None => value.to_string(),
        UnitConversion::PxToRem => {
            if strip_unit(trimmed, "rem").is_some() {
                return value.to_string();
            }
            let magnitude = strip_unit(trimmed, "px").unwrap_or(trimmed);
            match magnitude.parse::<f64>() {
                Ok(n) => format!("{}rem", n / base),
                Err(_) => value.to_string(),
            }
        }
        UnitConversion::RemToPx => {
            if strip_unit(trimmed, "px").is_some() {
                return value.to_string();
            }
            let magnitude = strip_unit(trimmed, "rem").unwrap_or(trimmed);
            match magnitude.parse::<f64>() {
                Ok(n) => format!("{}px", n * base),
                Err(_) => value.to_string(),
            }
        }
    }
}

/// Convert a leaf's value, applying the size-like eligibility check first
pub fn convert_leaf_value(leaf: &TokenLeaf, direction: UnitConversion, base: f64) -> String {
    if !is_size_like(leaf) {
        return leaf.value.clone();
    }
    convert_value(&leaf.value, direction, base)
}

/// Strip a trailing unit suffix, returning the magnitude part
fn strip_unit<'a>(value: &'a str, unit: &str) -> Option<&'a str> {
    value.strip_suffix(unit).map(str::trim_end)
}
