//! Document transforms.
//!
//! # Modules
//!
//! - `icon`: Replaces Font Awesome shortcodes in text nodes with `<i>` elements

mod icon;

pub use icon::{IconTransform, rewrite_text};
