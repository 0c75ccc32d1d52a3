//! Shared helpers.
//!
//! - `html`: escaping, entity decoding and element classification
//! - `plural`: count formatting for log messages

pub mod html;
pub mod plural;

pub use plural::plural_count;
