//! Text-node traversal with splice-at-index mutation.

use super::{Element, Node, Text};

/// Walk `root` depth-first in document order and offer every escaped text
/// node to `rewrite`.
///
/// When `rewrite` returns `Some(nodes)`, the text node is replaced at its
/// index by `nodes` and the walk resumes after the inserted run, so the
/// replacement is never revisited. `None` leaves the node untouched.
///
/// Elements whose tag is listed in `skip` are not descended into. Raw text
/// (script/style bodies, raw HTML) is never offered.
///
/// Returns the number of text nodes that were replaced.
pub fn splice_text<F>(root: &mut Element, skip: &[String], rewrite: &mut F) -> usize
where
    F: FnMut(&Text) -> Option<Vec<Node>>,
{
    let mut replaced = 0;
    let mut index = 0;

    while index < root.children.len() {
        let replacement = match &mut root.children[index] {
            Node::Text(text) if !text.is_raw() => rewrite(text),
            Node::Element(elem) => {
                if !skip.iter().any(|tag| *tag == elem.tag) {
                    replaced += splice_text(elem, skip, rewrite);
                }
                None
            }
            _ => None,
        };

        match replacement {
            Some(nodes) => {
                let len = nodes.len();
                root.children.remove(index);
                root.children.insert_many(index, nodes);
                replaced += 1;
                index += len;
            }
            None => index += 1,
        }
    }

    replaced
}

/// Read-only counterpart of [`splice_text`]: visit the same text nodes in
/// the same order without touching the tree.
pub fn for_each_text<F>(root: &Element, skip: &[String], visit: &mut F)
where
    F: FnMut(&Text),
{
    for child in &root.children {
        match child {
            Node::Text(text) if !text.is_raw() => visit(text),
            Node::Element(elem) if !skip.iter().any(|tag| *tag == elem.tag) => {
                for_each_text(elem, skip, visit);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{Attrs, Document};

    fn upper_if_marked(text: &Text) -> Option<Vec<Node>> {
        text.content
            .starts_with('!')
            .then(|| vec![Node::text("<"), Node::text(text.content.to_uppercase())])
    }

    #[test]
    fn test_splice_replaces_at_index() {
        let mut doc = Document::fragment([
            Node::text("keep"),
            Node::text("!swap"),
            Node::Comment("c".into()),
        ]);

        let count = splice_text(&mut doc.root, &[], &mut upper_if_marked);

        assert_eq!(count, 1);
        let texts: Vec<_> = doc
            .root
            .children
            .iter()
            .map(|n| n.as_text().map(|t| t.content.as_str()))
            .collect();
        assert_eq!(texts, vec![Some("keep"), Some("<"), Some("!SWAP"), None]);
    }

    #[test]
    fn test_splice_does_not_revisit_inserted_nodes() {
        let mut calls = 0;
        let mut doc = Document::fragment([Node::text("!a"), Node::text("!b")]);

        splice_text(&mut doc.root, &[], &mut |text: &Text| {
            calls += 1;
            Some(vec![Node::text(format!("{}!", text.content)); 3])
        });

        assert_eq!(calls, 2);
        assert_eq!(doc.root.children.len(), 6);
    }

    #[test]
    fn test_skip_elements_and_raw_text() {
        let mut code = Element::new("code", Attrs::new());
        code.push(Node::text("!inside"));
        let mut script = Element::new("script", Attrs::new());
        script.push(Text::raw("!raw"));
        let mut p = Element::new("p", Attrs::new());
        p.push(Node::text("!outside"));

        let mut doc = Document::fragment([
            Node::element(code),
            Node::element(script),
            Node::element(p),
        ]);
        let count = splice_text(&mut doc.root, &["code".to_string()], &mut upper_if_marked);

        assert_eq!(count, 1);
        assert_eq!(doc.text_content(), "!inside!raw<!OUTSIDE");
    }

    #[test]
    fn test_for_each_text_order_and_skips() {
        let mut em = Element::new("em", Attrs::new());
        em.push(Node::text("b"));
        let mut pre = Element::new("pre", Attrs::new());
        pre.push(Node::text("skipped"));
        let mut style = Element::new("style", Attrs::new());
        style.push(Text::raw("raw"));

        let doc = Document::fragment([
            Node::text("a"),
            Node::element(em),
            Node::element(pre),
            Node::element(style),
            Node::text("c"),
        ]);

        let mut seen = Vec::new();
        for_each_text(&doc.root, &["pre".to_string()], &mut |t: &Text| {
            seen.push(t.content.clone());
        });
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}
