//! Reverse lookup maps - parse previously emitted declaration files back
//! into value -> variable-name maps.
//!
//! The map is rebuilt from scratch on every run; the emitted files are the
//! only durable state between the forward and reverse pipelines.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tokenbridge_common::FileSystem;

/// Normalized numeric string (rounded integer, unit stripped) -> variable name
pub type ReverseLookupMap = HashMap<String, String>;

/// Matches one emitted declaration: `$name: value;`
fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^\$([A-Za-z0-9][A-Za-z0-9_-]*):\s*(.+);\s*$").expect("declaration pattern")
    })
}

/// Parse emitted declaration text into a reverse lookup map.
///
/// Values have their unit suffix stripped and are keyed by their rounded
/// integer form. Malformed lines and non-numeric values are skipped; when
/// two declarations round to the same key the later one wins.
pub fn parse_lookup(text: &str) -> ReverseLookupMap {
    let mut map = ReverseLookupMap::new();

    for capture in declaration_pattern().captures_iter(text) {
        let name = &capture[1];
        let value = capture[2].trim();

        let magnitude = value
            .strip_suffix("px")
            .or_else(|| value.strip_suffix("rem"))
            .unwrap_or(value);

        if let Ok(number) = magnitude.trim().parse::<f64>() {
            map.insert(format!("{}", number.round() as i64), name.to_string());
        }
    }

    map
}

/// Load a lookup map from an emitted file. A missing file is not fatal:
/// the map degrades to empty and resolution falls back to literals.
pub fn load_lookup(fs: &dyn FileSystem, path: &Path) -> ReverseLookupMap {
    if !fs.exists(path) {
        tracing::warn!(path = %path.display(), "emitted token file missing, resolving against an empty map");
        return ReverseLookupMap::new();
    }

    match fs.read_to_string(path) {
        Ok(text) => parse_lookup(&text),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read emitted token file");
            ReverseLookupMap::new()
        }
    }
}
