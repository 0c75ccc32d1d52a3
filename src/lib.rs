//! Font Awesome shortcodes for HTML and Markdown documents.
//!
//! Text such as `I love :fa-solid:coffee:` is rewritten into
//! `I love <i class="fa-solid fa-coffee" aria-hidden="true"></i>`.
//!
//! # Example
//!
//! ```
//! use fa_shortcode::config::IconConfig;
//! use fa_shortcode::pipeline::{IconTransform, Pipeline};
//! use fa_shortcode::vdom::{parse::parse_fragment, render::render_document};
//!
//! let doc = parse_fragment("<p>Check this out :fa-solid:coffee:</p>").unwrap();
//! let doc = Pipeline::new(doc)
//!     .pipe(IconTransform::new(&IconConfig::default()))
//!     .into_inner();
//!
//! assert_eq!(
//!     render_document(&doc),
//!     r#"<p>Check this out <i class="fa-solid fa-coffee" aria-hidden="true"></i></p>"#
//! );
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod pipeline;
pub mod shortcode;
pub mod utils;
pub mod vdom;

pub use config::{FaConfig, IconConfig};
pub use pipeline::{IconTransform, Transform, rewrite_text};
pub use shortcode::{Shortcode, Style, scan};
