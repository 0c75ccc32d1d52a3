//! Font Awesome shortcode scanning.
//!
//! Recognizes `:fa-<style>:<icon>:` where `<style>` is one of the closed set
//! [`Style`] and `<icon>` is `[A-Za-z0-9-]+`.
//!
//! ```text
//! "I love :fa-solid:coffee: and :fa-regular:heart:"
//!         └───── match 1 ──┘     └───── match 2 ──┘
//! ```
//!
//! The scan is global, leftmost-first and non-overlapping. Anything that
//! does not line up exactly (unknown style, missing delimiter, invalid icon
//! character) is plain text.

pub mod fragment;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use fragment::{build, icon_element};

/// Shortcode grammar. The style alternation mirrors [`Style::ALL`].
static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":fa-(solid|regular|brands):([A-Za-z0-9-]+):").unwrap());

// =============================================================================
// Style
// =============================================================================

/// Icon style keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Solid,
    Regular,
    Brands,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Solid, Style::Regular, Style::Brands];

    /// Decode a style keyword. Unknown keywords are `None`, not an error.
    ///
    /// The scanner's pattern only captures these three keywords, so decoding
    /// a match never fails.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "solid" => Some(Self::Solid),
            "regular" => Some(Self::Regular),
            "brands" => Some(Self::Brands),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Regular => "regular",
            Self::Brands => "brands",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Shortcode
// =============================================================================

/// A single recognized shortcode.
///
/// `start` and `length` are byte offsets into the scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcode<'a> {
    pub style: Style,
    pub icon: &'a str,
    pub start: usize,
    pub length: usize,
}

impl Shortcode<'_> {
    /// Byte offset one past the closing `:`.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for Shortcode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":fa-{}:{}:", self.style, self.icon)
    }
}

// =============================================================================
// Scanner
// =============================================================================

/// Iterator over the shortcodes of a string, in order of `start`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Shortcode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = SHORTCODE_RE.captures_at(self.text, self.cursor)?;
        let (whole, style, icon) = (caps.get(0)?, caps.get(1)?, caps.get(2)?);

        // Matches are never empty, so this always moves forward
        self.cursor = whole.end();

        Some(Shortcode {
            style: Style::parse(style.as_str())?,
            icon: icon.as_str(),
            start: whole.start(),
            length: whole.len(),
        })
    }
}

/// Scan `text` for shortcodes.
#[inline]
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner::new(text)
}
