//! Token source reader - turns a nested token tree into an ordered list of
//! leaves with their full paths.

use crate::error::{TokenError, TokenResult};
use serde_json::{Map, Value};

/// Declared shape of the source tree: how many leading path segments are
/// structural (theme label, mode/set label) rather than semantic. The
/// category segment is the first one after the prefix.
#[derive(Debug, Clone, Copy)]
pub struct SourceShape {
    pub prefix_segments: usize,
}

impl SourceShape {
    /// A leaf needs the structural prefix plus at least one semantic segment
    pub fn min_depth(&self) -> usize {
        self.prefix_segments + 1
    }
}

impl Default for SourceShape {
    fn default() -> Self {
        // Root theme label + mode label, e.g. ["TokenTest", "Mode 1", ...]
        Self { prefix_segments: 2 }
    }
}

/// Declared type of a token value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Color,
    Dimension,
    Other,
}

impl TokenKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "color" => TokenKind::Color,
            "dimension" => TokenKind::Dimension,
            _ => TokenKind::Other,
        }
    }
}

/// One token value at a fixed path in the source tree
#[derive(Debug, Clone)]
pub struct TokenLeaf {
    pub path: Vec<String>,
    pub value: String,
    pub kind: TokenKind,
}

impl TokenLeaf {
    /// Category segment, i.e. the first semantic segment after the prefix
    pub fn category(&self, shape: &SourceShape) -> Option<&str> {
        self.path.get(shape.prefix_segments).map(String::as_str)
    }
}

/// Parse a token source document into its leaves, in source order.
///
/// A leaf is an object carrying `$value`/`$type` (or the legacy
/// `value`/`type` spelling). Entries that don't fit the shape are skipped
/// with a warning rather than failing the run.
pub fn parse_source(text: &str, shape: &SourceShape) -> TokenResult<Vec<TokenLeaf>> {
    let root: Value = serde_json::from_str(text)?;

    let mut leaves = Vec::new();
    match root {
        Value::Object(ref map) => {
            let mut path = Vec::new();
            collect_leaves(map, &mut path, shape, &mut leaves);
        }
        _ => {
            return Err(TokenError::Json(<serde_json::Error as serde::de::Error>::custom(
                "token source root must be an object",
            )));
        }
    }

    Ok(leaves)
}

fn collect_leaves(
    map: &Map<String, Value>,
    path: &mut Vec<String>,
    shape: &SourceShape,
    out: &mut Vec<TokenLeaf>,
) {
    for (key, value) in map {
        path.push(key.clone());

        match value {
            Value::Object(obj) if is_leaf(obj) => match read_leaf(obj, path) {
                Some(leaf) if path.len() >= shape.min_depth() => out.push(leaf),
                Some(_) => {
                    tracing::warn!(path = %path.join("."), "token leaf below minimum depth, skipping");
                }
                None => {
                    tracing::warn!(path = %path.join("."), "malformed token leaf, skipping");
                }
            },
            Value::Object(obj) => collect_leaves(obj, path, shape, out),
            _ => {
                tracing::warn!(path = %path.join("."), "unexpected bare value in token tree, skipping");
            }
        }

        path.pop();
    }
}

fn is_leaf(obj: &Map<String, Value>) -> bool {
    obj.contains_key("$value") || obj.contains_key("value")
}

fn read_leaf(obj: &Map<String, Value>, path: &[String]) -> Option<TokenLeaf> {
    let raw = obj.get("$value").or_else(|| obj.get("value"))?;

    let value = match raw {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let kind = obj
        .get("$type")
        .or_else(|| obj.get("type"))
        .and_then(Value::as_str)
        .map(TokenKind::from_tag)
        .unwrap_or(TokenKind::Other);

    Some(TokenLeaf {
        path: path.to_vec(),
        value,
        kind,
    })
}
