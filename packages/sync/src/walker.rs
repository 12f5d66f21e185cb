//! Component tree walker - collects every reusable component node from a
//! document tree in depth-first pre-order.

use crate::figma::DocumentNode;

/// Node type that marks a reusable component in the document tree
pub const COMPONENT_TYPE: &str = "COMPONENT";

/// Collect all COMPONENT nodes reachable from `root`, pre-order.
///
/// Iterative with an explicit work list so arbitrarily deep trees can't
/// blow the stack.
pub fn find_components(root: &DocumentNode) -> Vec<&DocumentNode> {
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.node_type.as_deref() == Some(COMPONENT_TYPE) {
            found.push(node);
        }
        // Reverse so the first child is processed first
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, node_type: Option<&str>, children: Vec<DocumentNode>) -> DocumentNode {
        DocumentNode {
            id: name.to_string(),
            name: name.to_string(),
            node_type: node_type.map(str::to_string),
            children,
            ..Default::default()
        }
    }

    #[test]
    fn test_root_component_depth_zero() {
        let root = node("Button", Some("COMPONENT"), vec![]);
        let found = find_components(&root);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Button");
    }

    #[test]
    fn test_components_at_depth_one() {
        let root = node(
            "Page",
            Some("CANVAS"),
            vec![
                node("Button", Some("COMPONENT"), vec![]),
                node("Text", Some("TEXT"), vec![]),
                node("Card", Some("COMPONENT"), vec![]),
            ],
        );

        let names: Vec<_> = find_components(&root).iter().map(|n| n.name.clone()).collect();
        assert_eq!(names, vec!["Button", "Card"]);
    }

    #[test]
    fn test_deeply_nested_component() {
        // 5+ levels of wrapping frames
        let mut tree = node("Leaf", Some("COMPONENT"), vec![]);
        for depth in 0..6 {
            tree = node(&format!("Frame{}", depth), Some("FRAME"), vec![tree]);
        }

        let found = find_components(&tree);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Leaf");
    }

    #[test]
    fn test_pre_order_traversal() {
        let root = node(
            "Root",
            Some("COMPONENT"),
            vec![
                node(
                    "A",
                    Some("FRAME"),
                    vec![node("A1", Some("COMPONENT"), vec![])],
                ),
                node("B", Some("COMPONENT"), vec![]),
            ],
        );

        let names: Vec<_> = find_components(&root).iter().map(|n| n.name.clone()).collect();
        assert_eq!(names, vec!["Root", "A1", "B"]);
    }

    #[test]
    fn test_missing_type_and_children_tolerated() {
        let root = node("Untyped", None, vec![node("Inner", Some("COMPONENT"), vec![])]);
        let found = find_components(&root);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Inner");
    }
}
