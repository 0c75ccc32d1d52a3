//! Document processing pipeline.
//!
//! Parsed documents flow through a chain of [`Transform`]s before rendering.
//! This module is format-agnostic: HTML and Markdown inputs both arrive as a
//! [`Document`].
//!
//! ```text
//! ┌────────────┐   ┌───────────────┐   ┌──────────┐
//! │ parse HTML │──▶│ IconTransform │──▶│  render  │
//! │ / Markdown │   │  (text nodes) │   │  HTML    │
//! └────────────┘   └───────────────┘   └──────────┘
//! ```
//!
//! - `process()`: full pipeline used by `render`
//! - [`collect_shortcodes`]: read-only pass used by `scan`

pub mod transform;

use serde::Serialize;

use crate::config::FaConfig;
use crate::shortcode::{self, Style};
use crate::vdom::Document;
use crate::vdom::render::render_document;
use crate::vdom::visit::for_each_text;

pub use transform::{IconTransform, rewrite_text};

// =============================================================================
// Transform / Pipeline
// =============================================================================

/// A single document-to-document step.
pub trait Transform {
    fn transform(self, doc: Document) -> Document;
}

/// Builder-style chain of transforms over one document.
///
/// ```ignore
/// let doc = Pipeline::new(doc)
///     .pipe(IconTransform::new(&config.icons))
///     .into_inner();
/// ```
pub struct Pipeline {
    doc: Document,
}

impl Pipeline {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    pub fn pipe<T: Transform>(self, transform: T) -> Self {
        Self {
            doc: transform.transform(self.doc),
        }
    }

    /// Run `f` against the current document when `cond` holds.
    pub fn inspect_if(self, cond: bool, f: impl FnOnce(&Document)) -> Self {
        if cond {
            f(&self.doc);
        }
        self
    }

    pub fn into_inner(self) -> Document {
        self.doc
    }
}

// =============================================================================
// Processing
// =============================================================================

/// Rewrite shortcodes in `doc` and render it to HTML.
pub fn process(doc: Document, config: &FaConfig) -> String {
    let doc = Pipeline::new(doc)
        .pipe(IconTransform::new(&config.icons).with_skip(&config.render.skip_elements))
        .inspect_if(crate::logger::is_verbose(), |doc| {
            crate::debug!("render"; "{} text bytes after transform", doc.text_content().len());
        })
        .into_inner();

    render_document(&doc)
}

// =============================================================================
// Scanning
// =============================================================================

/// A shortcode that [`process`] would replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundIcon {
    pub shortcode: String,
    pub style: Style,
    pub icon: String,
    pub classes: Vec<String>,
}

/// Collect the shortcodes of `doc` in document order without rewriting it.
///
/// Visits exactly the text nodes the transform would, so skipped elements
/// and raw text contribute nothing.
pub fn collect_shortcodes(doc: &Document, config: &FaConfig) -> Vec<FoundIcon> {
    let mut found = Vec::new();
    for_each_text(&doc.root, &config.render.skip_elements, &mut |text| {
        found.extend(shortcode::scan(&text.content).map(|m| FoundIcon {
            shortcode: m.to_string(),
            style: m.style,
            icon: m.icon.to_string(),
            classes: config.icons.classes(m.style, m.icon),
        }));
    });
    found
}
