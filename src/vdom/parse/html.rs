//! HTML fragment to document conversion using tl.

use super::ParseError;
use crate::utils::html::{is_raw_text_element, unescape};
use crate::vdom::{Attrs, Document, Element, Node, Text};

/// Parse an HTML fragment into a `#fragment` document.
///
/// Tag names are lower-cased, text is entity-decoded, comments are kept and
/// the bodies of `script`/`style` are stored as raw text.
///
/// A leading `<!DOCTYPE ...>` is kept verbatim as the first child, since `tl`
/// does not produce a node for it.
pub fn parse_fragment(html: &str) -> Result<Document, ParseError> {
    let (doctype, body) = split_doctype(html);

    let dom = tl::parse(body, tl::ParserOptions::default())
        .map_err(|e| ParseError::Html(format!("{e:?}")))?;

    let parser = dom.parser();
    let children = dom
        .children()
        .iter()
        .filter_map(|handle| convert_node(*handle, parser));

    let leading = doctype.map(|d| Node::Text(Text::raw(d)));
    Ok(Document::fragment(leading.into_iter().chain(children)))
}

/// Split off a leading doctype declaration, including any whitespace before it.
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    const DOCTYPE: &str = "<!doctype";

    let trimmed = html.trim_start();
    let is_doctype = trimmed
        .get(..DOCTYPE.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(DOCTYPE));
    if !is_doctype {
        return (None, html);
    }

    let offset = html.len() - trimmed.len();
    match trimmed.find('>') {
        Some(end) => {
            let (doctype, rest) = html.split_at(offset + end + 1);
            (Some(doctype), rest)
        }
        None => (None, html),
    }
}

/// Convert a tl node handle to a tree node.
fn convert_node(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Node> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();

            let attrs: Attrs = tag
                .attributes()
                .iter()
                .map(|(key, value)| {
                    let value = value.map(|v| unescape(&v).into_owned()).unwrap_or_default();
                    (key.to_string(), value)
                })
                .collect();

            let mut elem = Element::new(tag_name, attrs);

            if is_raw_text_element(&elem.tag) {
                let body = tag.inner_html(parser).to_string();
                if !body.is_empty() {
                    elem.push(Text::raw(body));
                }
                return Some(Node::element(elem));
            }

            for child in tag.children().top().iter() {
                if let Some(node) = convert_node(*child, parser) {
                    elem.children.push(node);
                }
            }

            Some(Node::element(elem))
        }
        tl::Node::Raw(bytes) => {
            let raw = bytes.as_utf8_str();
            Some(Node::text(unescape(&raw).into_owned()))
        }
        tl::Node::Comment(bytes) => {
            let raw = bytes.as_utf8_str();
            let body = raw
                .strip_prefix("<!--")
                .and_then(|s| s.strip_suffix("-->"))
                .unwrap_or(&raw);
            Some(Node::Comment(body.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::render::render_document;

    fn first_element(doc: &Document) -> &Element {
        doc.root
            .children
            .iter()
            .find_map(Node::as_element)
            .expect("fragment should contain an element")
    }

    #[test]
    fn test_parse_paragraph() {
        let doc = parse_fragment("<p>Check this out :fa-solid:coffee:</p>").unwrap();
        let p = first_element(&doc);

        assert_eq!(p.tag, "p");
        assert_eq!(p.text_content(), "Check this out :fa-solid:coffee:");
    }

    #[test]
    fn test_parse_lowercases_tags_and_keeps_attrs() {
        let doc = parse_fragment(r#"<DIV id="main"><span>x</span></DIV>"#).unwrap();
        let div = first_element(&doc);

        assert_eq!(div.tag, "div");
        assert_eq!(div.get_attr("id"), Some("main"));
        assert_eq!(div.children.len(), 1);
    }

    #[test]
    fn test_parse_decodes_entities() {
        let doc = parse_fragment("<p>a &amp; b</p>").unwrap();
        assert_eq!(doc.text_content(), "a & b");
        assert_eq!(render_document(&doc), "<p>a &amp; b</p>");
    }

    #[test]
    fn test_parse_round_trip_nested() {
        let html = "<p>Just <em>regular</em> text here</p>";
        let doc = parse_fragment(html).unwrap();
        assert_eq!(render_document(&doc), html);
    }

    #[test]
    fn test_parse_keeps_doctype() {
        let html = "<!DOCTYPE html><html><body><p>:fa-brands:github:</p></body></html>";
        let doc = parse_fragment(html).unwrap();

        assert_eq!(
            doc.root.children.first().and_then(Node::as_text).map(|t| t.content.as_str()),
            Some("<!DOCTYPE html>")
        );
        assert!(render_document(&doc).starts_with("<!DOCTYPE html><html><body><p>"));
    }

    #[test]
    fn test_parse_doctype_is_case_insensitive() {
        let doc = parse_fragment("  <!doctype html><p>x</p>").unwrap();
        assert_eq!(render_document(&doc), "  <!doctype html><p>x</p>");
    }

    #[test]
    fn test_split_doctype() {
        assert_eq!(split_doctype("<p>x</p>"), (None, "<p>x</p>"));
        assert_eq!(split_doctype("<!DOCTYPE html"), (None, "<!DOCTYPE html"));
        assert_eq!(
            split_doctype("<!DOCTYPE html><p>x</p>"),
            (Some("<!DOCTYPE html>"), "<p>x</p>")
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = parse_fragment("").unwrap();
        assert!(doc.root.children.is_empty());
    }
}
