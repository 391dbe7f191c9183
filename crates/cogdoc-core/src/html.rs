//! HTML emitter for view trees.
//!
//! Produces markup equivalent to the documentation page: `data-testid`,
//! `id` (the derived key), `class`, and a `data-toggle` attribute naming the
//! action a click dispatches.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::view::{NodeKind, ViewNode};

/// Render a view tree as an HTML fragment.
pub fn to_html(root: &ViewNode) -> String {
    let mut out = String::new();
    write_node(root, &mut out);
    out
}

fn write_node(node: &ViewNode, out: &mut String) {
    let tag = node.kind.tag();
    out.push('<');
    out.push_str(tag);
    if let Some(key) = &node.key {
        attr(out, "id", key.as_str());
    }
    if let Some(test_id) = node.test_id {
        attr(out, "data-testid", test_id);
    }
    let mut classes = node.classes.clone();
    if let NodeKind::Icon(caret) = node.kind {
        classes.push(caret.name());
    }
    if !classes.is_empty() {
        attr(out, "class", &classes.join(" "));
    }
    if let Some(toggle) = &node.on_click {
        attr(out, "data-toggle", &toggle.to_string());
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text.as_str()));
    }
    for child in &node.children {
        write_node(child, out);
    }
    // Writing into a String cannot fail.
    let _ = write!(out, "</{tag}>");
}

fn attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape(value));
}
