//! `[icons]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [icons]
//! class_prefix = "fa"                 # -> fa-solid fa-coffee
//! additional_classes = ["fa-fw"]      # appended after the generated classes
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::shortcode::Style;

/// Markup settings for generated icon elements.
///
/// Read-only for the lifetime of a transform and shared by every text node
/// it rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Prefix for both the style class and the icon class.
    pub class_prefix: String,
    /// Classes appended verbatim, in order, after the generated ones.
    pub additional_classes: Vec<String>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            class_prefix: "fa".into(),
            additional_classes: Vec::new(),
        }
    }
}

/// Field paths of [`IconConfig`] for diagnostics.
pub struct IconConfigFields {
    pub class_prefix: FieldPath,
    pub additional_classes: FieldPath,
}

impl IconConfig {
    pub const FIELDS: IconConfigFields = IconConfigFields {
        class_prefix: FieldPath::new("icons.class_prefix"),
        additional_classes: FieldPath::new("icons.additional_classes"),
    };

    /// Class list for one icon: `[prefix-style, prefix-icon, ...additional]`.
    pub fn classes(&self, style: Style, icon: &str) -> Vec<String> {
        let prefix = &self.class_prefix;
        let mut classes = Vec::with_capacity(2 + self.additional_classes.len());
        classes.push(format!("{prefix}-{style}"));
        classes.push(format!("{prefix}-{icon}"));
        classes.extend(self.additional_classes.iter().cloned());
        classes
    }

    /// Validate icon configuration.
    ///
    /// # Checks
    /// - `class_prefix` must not be empty or contain whitespace
    /// - each additional class must be a single non-empty class name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.class_prefix.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.class_prefix,
                "must not be empty",
                "use \"fa\" for Font Awesome 6 class names",
            );
        } else if self.class_prefix.contains(char::is_whitespace) {
            diag.error(
                Self::FIELDS.class_prefix,
                format!("`{}` contains whitespace", self.class_prefix),
            );
        }

        for class in &self.additional_classes {
            if class.is_empty() {
                diag.error(Self::FIELDS.additional_classes, "contains an empty class name");
            } else if class.contains(char::is_whitespace) {
                diag.error_with_hint(
                    Self::FIELDS.additional_classes,
                    format!("`{class}` contains whitespace"),
                    "list each class as a separate entry",
                );
            }
        }
    }
}
