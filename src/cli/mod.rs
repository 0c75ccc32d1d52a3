//! Command-line interface module.

mod args;
pub mod common;
pub mod render;
pub mod scan;

pub use args::{Cli, Commands, IconArgs, RenderArgs, ScanArgs};
