//! Owned document tree.
//!
//! A small, mutable HTML tree that parsers build into and transforms rewrite
//! in place. Children are ordered, index-addressable and splice-capable.
//!
//! # Modules
//!
//! - `parse`: HTML fragment (tl) and Markdown (pulldown-cmark) front ends
//! - `render`: HTML serializer
//! - `visit`: text-node traversal with splice-at-index mutation

pub mod parse;
pub mod render;
pub mod visit;

use smallvec::SmallVec;

/// Tag of the synthetic container wrapping a parsed fragment.
///
/// The renderer emits its children but never the container itself.
pub const FRAGMENT_TAG: &str = "#fragment";

/// Child list of an element.
pub type Children = SmallVec<[Node; 4]>;

// =============================================================================
// Document
// =============================================================================

/// A parsed document: a single root element owning the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Wrap top-level nodes in a `#fragment` container.
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        let mut root = Element::new(FRAGMENT_TAG, Attrs::new());
        root.children.extend(children);
        Self { root }
    }

    /// Concatenated text of the whole document.
    pub fn text_content(&self) -> String {
        self.root.text_content()
    }
}

// =============================================================================
// Node
// =============================================================================

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Comment(String),
}

impl Node {
    /// Create an escaped text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    pub fn element(element: Element) -> Self {
        Node::Element(Box::new(element))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

// =============================================================================
// Element
// =============================================================================

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Children,
}

impl Element {
    pub fn new(tag: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: SmallVec::new(),
        }
    }

    pub fn is_fragment(&self) -> bool {
        self.tag == FRAGMENT_TAG
    }

    #[inline]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    #[inline]
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set(name, value);
    }

    /// Class names from the `class` attribute, in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(elem: &Element, out: &mut String) {
    for child in &elem.children {
        match child {
            Node::Element(e) => collect_text(e, out),
            Node::Text(t) => out.push_str(&t.content),
            Node::Comment(_) => {}
        }
    }
}

// =============================================================================
// Attrs
// =============================================================================

/// Ordered attribute list.
///
/// Insertion order is kept so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(SmallVec<[(String, String); 4]>);

impl Attrs {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Attrs {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

// =============================================================================
// Text
// =============================================================================

/// Controls how text content is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// HTML special characters are escaped on output.
    #[default]
    Escaped,
    /// Output as-is: script/style bodies and trusted raw HTML.
    Raw,
}

/// Text content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub kind: TextKind,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Escaped,
        }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Raw,
        }
    }

    pub fn is_raw(&self) -> bool {
        self.kind == TextKind::Raw
    }}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_set_replaces_in_place() {
        let mut attrs = Attrs::from([("class", "a"), ("id", "x")]);
        attrs.set("class", "b");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("class", "b"), ("id", "x")]);
    }

    #[test]
    fn test_element_classes() {
        let elem = Element::new("i", Attrs::from([("class", "fa-solid  fa-coffee")]));
        let classes: Vec<_> = elem.classes().collect();
        assert_eq!(classes, vec!["fa-solid", "fa-coffee"]);
    }

    #[test]
    fn test_element_without_class_has_no_classes() {
        let elem = Element::new("span", Attrs::new());
        assert_eq!(elem.classes().count(), 0);
    }

    #[test]
    fn test_text_content_skips_comments() {
        let mut p = Element::new("p", Attrs::new());
        p.push(Node::text("a"));
        p.push(Node::Comment("hidden".into()));
        let mut em = Element::new("em", Attrs::new());
        em.push(Node::text("b"));
        p.push(em);

        let doc = Document::fragment([Node::element(p)]);
        assert_eq!(doc.text_content(), "ab");
        assert!(doc.root.is_fragment());
    }
}
