//! Document front ends.
//!
//! | Module     | Input              | Backend          |
//! |------------|--------------------|------------------|
//! | `html`     | HTML fragment      | `tl`             |
//! | `markdown` | CommonMark + ext.  | `pulldown-cmark` |

pub mod html;
pub mod markdown;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use html::parse_fragment;
pub use markdown::{MarkdownOptions, from_markdown};

/// Errors raised while building a document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse HTML: {0}")]
    Html(String),
}

/// Source format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Html,
    Markdown,
}

impl InputFormat {
    /// Detect input format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Detect input format from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Display name for this format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a/index.HTML")), Some(InputFormat::Html));
        assert_eq!(InputFormat::from_path(Path::new("post.md")), Some(InputFormat::Markdown));
        assert_eq!(InputFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(InputFormat::from_path(Path::new("README")), None);
    }
}
