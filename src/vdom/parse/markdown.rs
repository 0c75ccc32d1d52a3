//! Markdown to document conversion using pulldown-cmark.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::vdom::{Attrs, Document, Element, Node, Text, TextKind};

/// Options for markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }

    /// Plain CommonMark, no extensions
    pub fn none() -> Self {
        Self {
            tables: false,
            footnotes: false,
            strikethrough: false,
            task_lists: false,
            heading_attributes: false,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// How a closed frame is attached to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    /// Attach the element itself
    Element,
    /// Attach only the children (html blocks)
    Transparent,
    /// Drop the frame and everything in it (metadata blocks)
    Discard,
}

/// Stack frame for tracking nested elements
struct StackFrame {
    element: Element,
    kind: FrameKind,
}

/// Markdown to document converter
struct MarkdownConverter {
    /// Stack of open elements (for nested structures)
    stack: Vec<StackFrame>,
    /// Root children (collected when stack is empty)
    root_children: Vec<Node>,
    /// Inside `<thead>`: cells become `<th>`
    in_table_head: bool,
}

impl MarkdownConverter {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root_children: Vec::new(),
            in_table_head: false,
        }
    }

    fn convert(mut self, markdown: &str, options: &MarkdownOptions) -> Document {
        let parser = Parser::new_ext(markdown, options.to_pulldown_options());

        for event in parser {
            self.handle_event(event);
        }

        // Close anything left open
        while !self.stack.is_empty() {
            self.close_frame();
        }

        Document::fragment(self.root_children)
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.add_text(text.as_ref()),
            Event::Code(code) => self.add_inline_code(code.as_ref()),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.add_node(Node::Text(Text::raw(html.to_string())));
            }
            Event::SoftBreak => self.add_text("\n"),
            Event::HardBreak => self.add_element("br", Attrs::new()),
            Event::Rule => self.add_element("hr", Attrs::new()),
            Event::FootnoteReference(name) => self.add_footnote_ref(name.as_ref()),
            Event::TaskListMarker(checked) => self.add_task_marker(checked),
            Event::InlineMath(math) => self.add_math(math.as_ref(), false),
            Event::DisplayMath(math) => self.add_math(math.as_ref(), true),
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::CodeBlock(kind) => {
                // <pre><code class="language-x">
                self.open("pre", Attrs::new(), FrameKind::Element);
                let attrs = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                        Attrs::from([("class", format!("language-{lang}").as_str())])
                    }
                    _ => Attrs::new(),
                };
                self.open("code", attrs, FrameKind::Element);
            }
            Tag::HtmlBlock => self.open("div", Attrs::new(), FrameKind::Transparent),
            Tag::MetadataBlock(_) => self.open("div", Attrs::new(), FrameKind::Discard),
            Tag::TableHead => {
                // Header cells arrive without a row of their own
                self.in_table_head = true;
                self.open("thead", Attrs::new(), FrameKind::Element);
                self.open("tr", Attrs::new(), FrameKind::Element);
            }
            Tag::TableCell => {
                let cell = if self.in_table_head { "th" } else { "td" };
                self.open(cell, Attrs::new(), FrameKind::Element);
            }
            other => {
                let (tag_name, attrs) = tag_to_element(&other);
                self.open(tag_name, attrs, FrameKind::Element);
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock => {
                self.close_frame();
                self.close_frame();
            }
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.close_frame();
                self.close_frame();
            }
            _ => self.close_frame(),
        }
    }

    fn open(&mut self, tag: &str, attrs: Attrs, kind: FrameKind) {
        self.stack.push(StackFrame {
            element: Element::new(tag, attrs),
            kind,
        });
    }

    /// Pop the innermost frame and attach it to its parent.
    fn close_frame(&mut self) {
        let Some(StackFrame { mut element, kind }) = self.stack.pop() else {
            return;
        };

        match kind {
            FrameKind::Element => {
                if element.tag == "img" {
                    // Alt text arrives as child text events
                    let alt = element.text_content();
                    element.children.clear();
                    element.set_attr("alt", alt);
                }
                self.add_node(Node::element(element));
            }
            FrameKind::Transparent => {
                for child in element.children {
                    self.add_node(child);
                }
            }
            FrameKind::Discard => {}
        }
    }

    /// Add text, merging with a preceding text node.
    ///
    /// pulldown-cmark may split one run of text into several events; merging
    /// keeps inline shortcodes inside a single text node.
    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let children = match self.stack.last_mut() {
            Some(frame) => frame.element.children.last_mut(),
            None => self.root_children.last_mut(),
        };

        if let Some(Node::Text(prev)) = children
            && prev.kind == TextKind::Escaped
        {
            prev.content.push_str(text);
            return;
        }

        self.add_node(Node::text(text));
    }

    fn add_inline_code(&mut self, code: &str) {
        let mut elem = Element::new("code", Attrs::new());
        elem.push(Node::text(code));
        self.add_node(Node::element(elem));
    }

    fn add_element(&mut self, tag: &str, attrs: Attrs) {
        self.add_node(Node::element(Element::new(tag, attrs)));
    }

    fn add_footnote_ref(&mut self, name: &str) {
        let mut elem = Element::new("sup", Attrs::from([("class", "footnote-ref")]));

        let href = format!("#fn-{name}");
        let id = format!("fnref-{name}");
        let attrs = Attrs::from([("href", href.as_str()), ("id", id.as_str())]);
        let mut link = Element::new("a", attrs);
        link.push(Node::text(format!("[{name}]")));

        elem.push(link);
        self.add_node(Node::element(elem));
    }

    fn add_task_marker(&mut self, checked: bool) {
        let mut attrs = Attrs::from([("type", "checkbox"), ("disabled", "")]);
        if checked {
            attrs.set("checked", "");
        }
        self.add_element("input", attrs);
    }

    fn add_math(&mut self, formula: &str, display: bool) {
        let (tag, class) = if display {
            ("div", "math math-display")
        } else {
            ("span", "math math-inline")
        };
        let mut elem = Element::new(tag, Attrs::from([("class", class)]));
        elem.push(Node::text(formula));
        self.add_node(Node::element(elem));
    }

    /// Add a node to current context (top of stack or root)
    fn add_node(&mut self, node: Node) {
        if let Some(frame) = self.stack.last_mut() {
            frame.element.children.push(node);
        } else {
            self.root_children.push(node);
        }
    }
}

/// Convert pulldown-cmark Tag to (tag_name, attributes)
fn tag_to_element(tag: &Tag) -> (&'static str, Attrs) {
    match tag {
        // Block elements
        Tag::Paragraph => ("p", Attrs::new()),
        Tag::Heading { level, id, .. } => {
            let mut attrs = Attrs::new();
            if let Some(id) = id {
                attrs.set("id", id.to_string());
            }
            (heading_level_to_tag(*level), attrs)
        }
        Tag::BlockQuote(_) => ("blockquote", Attrs::new()),
        Tag::List(Some(start)) => {
            let mut attrs = Attrs::new();
            if *start != 1 {
                attrs.set("start", start.to_string());
            }
            ("ol", attrs)
        }
        Tag::List(None) => ("ul", Attrs::new()),
        Tag::Item => ("li", Attrs::new()),
        Tag::FootnoteDefinition(name) => {
            let id = format!("fn-{name}");
            ("div", Attrs::from([("class", "footnote"), ("id", id.as_str())]))
        }

        // Table elements
        Tag::Table(_) => ("table", Attrs::new()),
        Tag::TableHead => ("thead", Attrs::new()),
        Tag::TableRow => ("tr", Attrs::new()),
        Tag::TableCell => ("td", Attrs::new()),

        // Inline elements
        Tag::Emphasis => ("em", Attrs::new()),
        Tag::Strong => ("strong", Attrs::new()),
        Tag::Strikethrough => ("del", Attrs::new()),
        Tag::Superscript => ("sup", Attrs::new()),
        Tag::Subscript => ("sub", Attrs::new()),
        Tag::Link {
            dest_url, title, ..
        } => {
            let mut attrs = Attrs::from([("href", &**dest_url)]);
            if !title.is_empty() {
                attrs.set("title", title.to_string());
            }
            ("a", attrs)
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let mut attrs = Attrs::from([("src", &**dest_url)]);
            if !title.is_empty() {
                attrs.set("title", title.to_string());
            }
            ("img", attrs)
        }

        // Definition list (extended syntax)
        Tag::DefinitionList => ("dl", Attrs::new()),
        Tag::DefinitionListTitle => ("dt", Attrs::new()),
        Tag::DefinitionListDefinition => ("dd", Attrs::new()),

        // Handled by the converter before reaching here
        Tag::CodeBlock(_) => ("pre", Attrs::new()),
        Tag::HtmlBlock | Tag::MetadataBlock(_) => ("div", Attrs::new()),
    }
}

fn heading_level_to_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Convert markdown string to a `#fragment` document
pub fn from_markdown(markdown: &str, options: &MarkdownOptions) -> Document {
    MarkdownConverter::new().convert(markdown, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::render::render_document;

    fn render(md: &str) -> String {
        render_document(&from_markdown(md, &MarkdownOptions::all()))
    }

    #[test]
    fn test_basic_paragraph() {
        let doc = from_markdown("Hello world", &MarkdownOptions::default());
        assert!(doc.root.is_fragment());
        assert_eq!(doc.root.children.len(), 1);
        assert_eq!(render_document(&doc), "<p>Hello world</p>");
    }

    #[test]
    fn test_heading() {
        let doc = from_markdown("# Title", &MarkdownOptions::none());
        let h1 = doc.root.children[0].as_element().expect("Expected element");
        assert_eq!(h1.tag, "h1");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[Link](https://example.com)"),
            r#"<p><a href="https://example.com">Link</a></p>"#
        );
    }

    #[test]
    fn test_shortcode_stays_in_one_text_node() {
        let doc = from_markdown("I love :fa-solid:coffee: a lot", &MarkdownOptions::all());
        let p = doc.root.children[0].as_element().unwrap();
        assert_eq!(p.children.len(), 1);
        assert_eq!(p.text_content(), "I love :fa-solid:coffee: a lot");
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            render("```rust\nlet x = 1;\n```"),
            "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_image_alt_text() {
        assert_eq!(
            render("![a cat](cat.png)"),
            r#"<p><img src="cat.png" alt="a cat"></p>"#
        );
    }

    #[test]
    fn test_inline_html_is_raw() {
        assert_eq!(render("a <b>bold</b> move"), "<p>a <b>bold</b> move</p>");
    }

    #[test]
    fn test_table_head_cells() {
        let html = render("| a |\n|---|\n| b |");
        assert!(html.contains("<thead><tr><th>a</th></tr></thead>"));
        assert!(html.contains("<td>b</td>"));
    }
}
