//! Configuration section definitions.
//!
//! Each module corresponds to a section in `fa.toml`:
//!
//! | Module   | TOML Section | Purpose                                 |
//! |----------|--------------|-----------------------------------------|
//! | `icons`  | `[icons]`    | Class prefix and extra icon classes     |
//! | `render` | `[render]`   | Traversal skips and Markdown extensions |

mod icons;
mod render;

pub use icons::IconConfig;
pub use render::RenderConfig;
