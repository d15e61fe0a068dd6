//! Structured dump of a node, used as the body of fallback markers.
//!
//! The dump is compact JSON on a single line, so the marker built from it stays one
//! wrappable token instead of spilling newlines into the surrounding layout.

use super::node::Node;

/// Serialize a node (and its whole subtree) for display.
pub fn dump(node: &Node) -> String {
    match serde_json::to_string(node) {
        Ok(json) => json,
        // Serializing plain data into a string cannot fail in practice; keep a readable
        // fallback rather than losing the node.
        Err(_) => format!("{node:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_is_single_line_json() {
        let node = Node::math("\\alpha +\n\\beta");
        let dumped = dump(&node);
        assert!(!dumped.contains('\n'));
        assert_eq!(dumped, r#"{"type":"math","value":"\\alpha +\n\\beta"}"#);
    }

    #[test]
    fn test_dump_unknown_keeps_fields() {
        let node = Node::from_json(r#"{"type": "table", "rows": [1, 2]}"#).unwrap();
        let dumped = dump(&node);
        assert!(dumped.contains(r#""type":"table""#));
        assert!(dumped.contains(r#""rows":[1,2]"#));
    }

    #[test]
    fn test_dump_includes_subtree() {
        let node = Node::field_list(vec![Node::text("a")]);
        assert_eq!(
            dump(&node),
            r#"{"type":"field_list","children":[{"type":"text","value":"a"}]}"#
        );
    }
}
