//! Plain-text outline of the visible part of a view tree.

use crate::view::{NodeKind, ViewNode};

const INDENT: &str = "  ";

/// Render the visible nodes as an indented outline.
///
/// Hidden subtrees are skipped. A clickable node becomes one line holding its
/// caret and label followed by the toggle it dispatches. List contents are
/// indented one level.
pub fn to_outline(root: &ViewNode) -> String {
    let mut lines = Vec::new();
    write_node(root, 0, &mut lines);
    lines.join("\n")
}

fn write_node(node: &ViewNode, depth: usize, lines: &mut Vec<String>) {
    if node.is_hidden() {
        return;
    }
    if let Some(toggle) = &node.on_click {
        lines.push(format!(
            "{}{}  ({toggle})",
            INDENT.repeat(depth),
            node.inline_text()
        ));
        return;
    }
    if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
        let indent = INDENT.repeat(depth);
        lines.extend(text.lines().map(|line| format!("{indent}{line}")));
    }
    let child_depth = if node.kind == NodeKind::Ul {
        depth + 1
    } else {
        depth
    };
    for child in &node.children {
        write_node(child, child_depth, lines);
    }
}
