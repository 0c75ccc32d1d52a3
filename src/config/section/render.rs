//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! skip_elements = ["script", "style", "code"]   # never rewrite inside these
//!
//! [render.markdown]
//! tables = true
//! footnotes = false
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::vdom::parse::MarkdownOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Elements whose subtree is left alone.
    pub skip_elements: Vec<String>,
    /// Markdown extensions.
    pub markdown: MarkdownOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            skip_elements: vec!["script".into(), "style".into()],
            markdown: MarkdownOptions::default(),
        }
    }
}

pub struct RenderConfigFields {
    pub skip_elements: FieldPath,
}

impl RenderConfig {
    pub const FIELDS: RenderConfigFields = RenderConfigFields {
        skip_elements: FieldPath::new("render.skip_elements"),
    };

    /// Lower-case the skip list so it matches parsed tag names.
    pub fn normalize(&mut self) {
        for tag in &mut self.skip_elements {
            *tag = tag.trim().to_ascii_lowercase();
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.skip_elements.iter().any(|tag| tag.trim().is_empty()) {
            diag.error(Self::FIELDS.skip_elements, "contains an empty tag name");
        }
    }
}
