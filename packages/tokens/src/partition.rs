//! Category partitioning - split flattened variables into per-category
//! output groups discovered from the source tree itself.

use serde::{Deserialize, Serialize};

/// A flattened token ready for emission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmittedVariable {
    /// Flat, normalized identifier (unique per emitted file)
    pub name: String,

    /// Output value, unit-normalized when applicable
    pub value: String,

    /// Category segment from the originating path, when one exists
    pub category: Option<String>,
}

/// One output group: every variable whose category segment matches the label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPartition {
    pub label: String,
    pub variables: Vec<EmittedVariable>,
}

/// Partition variables by their category label, preserving discovery order.
///
/// The category set is dynamic - whatever labels the source tree carries.
/// Variables without a category segment belong to no partition and are
/// dropped here.
pub fn partition(variables: Vec<EmittedVariable>) -> Vec<CategoryPartition> {
    let mut partitions: Vec<CategoryPartition> = Vec::new();

    for variable in variables {
        let Some(label) = variable.category.clone() else {
            tracing::warn!(name = %variable.name, "variable without category segment, dropped from partitions");
            continue;
        };

        match partitions.iter_mut().find(|p| p.label == label) {
            Some(p) => p.variables.push(variable),
            None => partitions.push(CategoryPartition {
                label,
                variables: vec![variable],
            }),
        }
    }

    partitions
}
