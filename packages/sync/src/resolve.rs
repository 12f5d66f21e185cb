//! Reverse resolution - map a raw measurement from the design document back
//! to the token that declared it, or fall back to a literal.

use crate::lookup::ReverseLookupMap;

/// Resolve a measurement to a token reference (`$spacing-sm`) or a px
/// literal (`7px`). Absent measurements resolve to `0px`.
///
/// Matching rounds to the nearest integer with `f64::round`, so `.5`
/// boundaries round half away from zero; ties were left undefined upstream
/// and this is the recorded assumption. On a miss the *unrounded* value is
/// emitted, so nothing is silently nudged onto a token it never matched.
pub fn resolve(measurement: Option<f64>, map: &ReverseLookupMap) -> String {
    let Some(value) = measurement else {
        return "0px".to_string();
    };

    let key = format!("{}", value.round() as i64);
    match map.get(&key) {
        Some(name) => format!("${}", name),
        None => format!("{}px", value),
    }
}
