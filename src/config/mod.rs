//! Configuration management for `fa.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── icons      # [icons]
//! │   └── render     # [render], [render.markdown]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # FaConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section             | Purpose                                  |
//! |---------------------|------------------------------------------|
//! | `[icons]`           | Class prefix and additional icon classes |
//! | `[render]`          | Elements never rewritten                 |
//! | `[render.markdown]` | Markdown extensions                      |
//!
//! The file is optional: without one every field takes its default and
//! icons render as `fa-<style> fa-<icon>`.

pub mod section;
pub mod types;
mod util;

pub use util::{find_config_file, find_config_file_from};

pub use section::{IconConfig, RenderConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "fa.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `fa.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaConfig {
    /// Absolute path of the loaded file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub icons: IconConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl FaConfig {
    /// Load configuration from `path`.
    ///
    /// Relative paths are searched upward from the working directory. A
    /// missing file is an error only when `required` is set; otherwise the
    /// defaults are used.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let Some(found) = find_config_file(path) else {
            if required {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            crate::debug!("config"; "no {} found, using defaults", path.display());
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&found)?;
        config.config_path = Some(found);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.render.normalize();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.render.normalize();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply `--prefix` / `--class` overrides from the command line.
    pub fn apply_icon_overrides(
        &mut self,
        class_prefix: Option<&String>,
        additional_classes: Option<&Vec<String>>,
    ) {
        Self::update_option(&mut self.icons.class_prefix, class_prefix);
        Self::update_option(&mut self.icons.additional_classes, additional_classes);
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.icons.validate(&mut diag);
        self.render.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FaConfig {
    let (mut parsed, ignored) = FaConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.render.normalize();
    parsed
}

// ============================================================================
// tests
// ============================================================================
