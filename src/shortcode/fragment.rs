//! Fragment building: split a text node around its shortcodes.

use super::{Shortcode, Style};
use crate::config::IconConfig;
use crate::vdom::{Attrs, Element, Node};

/// Build the replacement sequence for `text`.
///
/// Gaps between matches become text nodes and each match becomes an icon
/// element, in source order. Empty gaps are omitted. With no matches the
/// result is a single text node holding the whole input.
///
/// `matches` must be ordered and non-overlapping, as produced by
/// [`scan`](super::scan).
pub fn build(text: &str, matches: &[Shortcode<'_>], config: &IconConfig) -> Vec<Node> {
    if matches.is_empty() {
        return vec![Node::text(text)];
    }

    let mut nodes = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;

    for m in matches {
        if m.start > cursor {
            nodes.push(Node::text(&text[cursor..m.start]));
        }
        nodes.push(Node::element(icon_element(m.style, m.icon, config)));
        cursor = m.end();
    }

    if cursor < text.len() {
        nodes.push(Node::text(&text[cursor..]));
    }

    nodes
}

/// Build a single `<i class="..." aria-hidden="true"></i>` element.
pub fn icon_element(style: Style, icon: &str, config: &IconConfig) -> Element {
    let class = config.classes(style, icon).join(" ");
    Element::new("i", Attrs::from([("class", class.as_str()), ("aria-hidden", "true")]))
}
