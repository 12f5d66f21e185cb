pub mod emit;
pub mod error;
pub mod name;
pub mod partition;
pub mod source;
pub mod units;

#[cfg(test)]
mod tests_integration;

pub use emit::{build, flatten, render_declarations, BuildOptions, ConflictPolicy, DECLARATION_SIGIL};
pub use error::{TokenError, TokenResult};
pub use name::{collapse, flat_name, normalize};
pub use partition::{partition, CategoryPartition, EmittedVariable};
pub use source::{parse_source, SourceShape, TokenKind, TokenLeaf};
pub use units::{convert_leaf_value, convert_value, UnitConversion, DEFAULT_REM_BASE};
