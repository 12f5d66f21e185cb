//! Name collapsing - turns a nested token path into a flat stylesheet
//! identifier.
//!
//! `["TokenTest", "Mode 1", "base", "size"]` collapses to `"base-size"`:
//! the structural prefix (theme + mode) is dropped and the semantic
//! segments are joined with `-`.

/// Prefix applied to identifiers that would otherwise start with a digit,
/// which stylesheet syntax forbids
pub const DIGIT_PREFIX: &str = "s-";

/// Collapse a leaf path by dropping the structural prefix and joining the
/// rest with `-`. Pure and deterministic; distinct paths may collapse to
/// the same name (conflict handling happens at emission).
pub fn collapse(path: &[String], prefix_segments: usize) -> String {
    if path.len() <= prefix_segments {
        return String::new();
    }
    path[prefix_segments..].join("-")
}

/// Rewrite identifiers that start with a digit so they are valid in the
/// target stylesheet syntax
pub fn normalize(name: &str) -> String {
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("{}{}", DIGIT_PREFIX, name),
        _ => name.to_string(),
    }
}

/// Collapse and normalize in one step
pub fn flat_name(path: &[String], prefix_segments: usize) -> String {
    normalize(&collapse(path, prefix_segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collapse_drops_prefix() {
        let p = path(&["TokenTest", "Mode 1", "base", "size"]);
        assert_eq!(collapse(&p, 2), "base-size");
    }

    #[test]
    fn test_collapse_is_deterministic() {
        let p = path(&["Theme", "Mode", "spacing", "sm"]);
        assert_eq!(collapse(&p, 2), collapse(&p, 2));
        assert_eq!(collapse(&p, 2), "spacing-sm");
    }

    #[test]
    fn test_collapse_identical_suffixes_collide() {
        let a = path(&["Theme", "Light", "spacing", "sm"]);
        let b = path(&["Theme", "Dark", "spacing", "sm"]);
        assert_eq!(collapse(&a, 2), collapse(&b, 2));
    }

    #[test]
    fn test_collapse_short_path() {
        let p = path(&["Theme", "Mode"]);
        assert_eq!(collapse(&p, 2), "");
    }

    #[test]
    fn test_normalize_digit_leading() {
        assert_eq!(normalize("2xl"), "s-2xl");
        assert_eq!(normalize("100"), "s-100");
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize("spacing-sm"), "spacing-sm");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_flat_name() {
        let p = path(&["Theme", "Mode", "2xl", "gap"]);
        assert_eq!(flat_name(&p, 2), "s-2xl-gap");

        let p = path(&["Theme", "Mode", "spacing", "sm"]);
        assert_eq!(flat_name(&p, 2), "spacing-sm");
    }
}
