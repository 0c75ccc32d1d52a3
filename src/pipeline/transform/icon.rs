//! Shortcode-to-icon transform.
//!
//! Rewrites every text node containing `:fa-<style>:<icon>:` into the
//! surrounding text plus one `<i>` element per shortcode:
//!
//! ```text
//! <p>Check this out :fa-solid:coffee:</p>
//!   ↓
//! <p>Check this out <i class="fa-solid fa-coffee" aria-hidden="true"></i></p>
//! ```
//!
//! Text without a shortcode is left untouched, so the transform is a no-op on
//! documents that never use the syntax. Generated icons carry no text
//! children, which makes a second pass a no-op as well.

use crate::config::IconConfig;
use crate::pipeline::Transform;
use crate::shortcode::{self, Shortcode};
use crate::vdom::visit::splice_text;
use crate::vdom::{Document, Node};

// =============================================================================
// Transform
// =============================================================================

/// Replaces shortcodes in the text nodes of a document.
pub struct IconTransform<'a> {
    config: &'a IconConfig,
    skip: &'a [String],
}

impl<'a> IconTransform<'a> {
    pub fn new(config: &'a IconConfig) -> Self {
        Self { config, skip: &[] }
    }

    /// Leave the subtrees of these elements alone.
    pub fn with_skip(mut self, skip: &'a [String]) -> Self {
        self.skip = skip;
        self
    }

    /// Rewrite `doc` in place, returning how many text nodes were replaced.
    pub fn apply(&self, doc: &mut Document) -> usize {
        splice_text(&mut doc.root, self.skip, &mut |text| {
            rewrite_text(&text.content, self.config)
        })
    }
}

impl Transform for IconTransform<'_> {
    fn transform(self, mut doc: Document) -> Document {
        let replaced = self.apply(&mut doc);
        if replaced > 0 {
            crate::debug!("render"; "rewrote {} text node(s)", replaced);
        }
        doc
    }
}

/// Replacement nodes for one text node, or `None` when it has no shortcode.
pub fn rewrite_text(text: &str, config: &IconConfig) -> Option<Vec<Node>> {
    let matches: Vec<Shortcode<'_>> = shortcode::scan(text).collect();
    if matches.is_empty() {
        return None;
    }
    Some(shortcode::build(text, &matches, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::parse::parse_fragment;
    use crate::vdom::render::render_document;

    fn render_with(html: &str, config: &IconConfig) -> String {
        let doc = parse_fragment(html).unwrap();
        render_document(&IconTransform::new(config).transform(doc))
    }

    fn render(html: &str) -> String {
        render_with(html, &IconConfig::default())
    }

    #[test]
    fn test_single_icon() {
        assert_eq!(
            render("<p>Check this out :fa-solid:coffee:</p>"),
            r#"<p>Check this out <i class="fa-solid fa-coffee" aria-hidden="true"></i></p>"#
        );
    }

    #[test]
    fn test_multiple_icons() {
        assert_eq!(
            render("<p>I love :fa-solid:coffee: and :fa-regular:heart: coding!</p>"),
            concat!(
                "<p>I love ",
                r#"<i class="fa-solid fa-coffee" aria-hidden="true"></i>"#,
                " and ",
                r#"<i class="fa-regular fa-heart" aria-hidden="true"></i>"#,
                " coding!</p>"
            )
        );
    }

    #[test]
    fn test_custom_prefix() {
        let config = IconConfig {
            class_prefix: "icon".into(),
            ..IconConfig::default()
        };
        assert_eq!(
            render_with("<p>Coffee :fa-solid:coffee:</p>", &config),
            r#"<p>Coffee <i class="icon-solid icon-coffee" aria-hidden="true"></i></p>"#
        );
    }

    #[test]
    fn test_additional_classes() {
        let config = IconConfig {
            additional_classes: vec!["custom".into(), "large".into()],
            ..IconConfig::default()
        };
        assert_eq!(
            render_with("<p>Coffee :fa-solid:coffee:</p>", &config),
            r#"<p>Coffee <i class="fa-solid fa-coffee custom large" aria-hidden="true"></i></p>"#
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        let html = "<p>Just <em>regular</em> text here</p>";
        let mut doc = parse_fragment(html).unwrap();
        let before = doc.clone();

        assert_eq!(IconTransform::new(&IconConfig::default()).apply(&mut doc), 0);
        assert_eq!(doc, before);
        assert_eq!(render_document(&doc), html);
    }

    #[test]
    fn test_unknown_style_unchanged() {
        assert_eq!(
            render("<p>Unknown :fa-unknown:icon:</p>"),
            "<p>Unknown :fa-unknown:icon:</p>"
        );
    }

    #[test]
    fn test_idempotent() {
        let config = IconConfig::default();
        let transform = IconTransform::new(&config);
        let mut doc = parse_fragment("<p>a :fa-solid:x: b <b>:fa-brands:y:</b></p>").unwrap();

        assert_eq!(transform.apply(&mut doc), 2);
        let once = doc.clone();
        assert_eq!(transform.apply(&mut doc), 0);
        assert_eq!(doc, once);
    }

    #[test]
    fn test_siblings_preserved() {
        assert_eq!(
            render("<ul><li>:fa-solid:check: done</li><li>todo</li></ul>"),
            concat!(
                "<ul><li>",
                r#"<i class="fa-solid fa-check" aria-hidden="true"></i>"#,
                " done</li><li>todo</li></ul>"
            )
        );
    }

    #[test]
    fn test_skip_elements() {
        let config = IconConfig::default();
        let skip = vec!["code".to_string()];
        let mut doc =
            parse_fragment("<p><code>:fa-solid:x:</code> :fa-solid:y:</p>").unwrap();

        let replaced = IconTransform::new(&config).with_skip(&skip).apply(&mut doc);
        assert_eq!(replaced, 1);
        assert!(render_document(&doc).starts_with("<p><code>:fa-solid:x:</code> <i "));
    }

    #[test]
    fn test_script_body_never_rewritten() {
        let html = "<script>let s = \":fa-solid:x:\";</script>";
        assert_eq!(render(html), html);
    }

    #[test]
    fn test_escaped_text_stays_escaped() {
        assert_eq!(
            render("<p>a &lt; b :fa-solid:lt:</p>"),
            r#"<p>a &lt; b <i class="fa-solid fa-lt" aria-hidden="true"></i></p>"#
        );
    }

    #[test]
    fn test_rewrite_text() {
        let config = IconConfig::default();
        assert!(rewrite_text("nothing here", &config).is_none());
        assert!(rewrite_text("", &config).is_none());

        let nodes = rewrite_text(":fa-solid:a::fa-regular:b:", &config).unwrap();
        assert_eq!(nodes.len(), 2);
    }
}
