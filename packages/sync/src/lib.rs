pub mod error;
pub mod figma;
pub mod generate;
pub mod lookup;
pub mod resolve;
pub mod walker;

#[cfg(test)]
mod tests_integration;

pub use error::{SyncError, SyncResult};
pub use figma::{ComponentRef, DocumentNode, FigmaClient};
pub use generate::{component_scss, sanitize_component_name, write_component_scss, LookupMaps};
pub use lookup::{load_lookup, parse_lookup, ReverseLookupMap};
pub use resolve::resolve;
pub use walker::find_components;
