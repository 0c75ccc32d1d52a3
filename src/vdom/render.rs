//! HTML serializer.

use super::{Document, Element, Node, TextKind};
use crate::utils::html::{escape, escape_attr, is_void_element};

/// Render a document to an HTML string.
///
/// A `#fragment` root contributes only its children.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::with_capacity(256);
    render_element(&doc.root, &mut out);
    out
}

/// Render a single node (and its subtree).
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn render_element(elem: &Element, out: &mut String) {
    if elem.is_fragment() {
        write_children(elem, out);
        return;
    }

    out.push('<');
    out.push_str(&elem.tag);
    for (name, value) in elem.attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&elem.tag) {
        return;
    }

    write_children(elem, out);
    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

fn write_children(elem: &Element, out: &mut String) {
    for child in &elem.children {
        write_node(child, out);
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, out),
        Node::Text(text) => match text.kind {
            TextKind::Escaped => out.push_str(&escape(&text.content)),
            TextKind::Raw => out.push_str(&text.content),
        },
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
    }
}
