//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::vdom::parse::InputFormat;

/// Rewrite Font Awesome shortcodes (`:fa-solid:coffee:`) into icon markup
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render documents with shortcodes replaced by icon elements
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// List the shortcodes found in documents as JSON
    #[command(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Files or directories to render. Use `-` to read one document from stdin.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Write `<stem>.html` files into this directory instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub icons: IconArgs,

    /// Input format (default: detect from file extension, html for stdin)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,
}

/// Scan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Files or directories to scan. Use `-` to read one document from stdin.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub icons: IconArgs,

    /// Input format (default: detect from file extension, html for stdin)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Icon markup overrides shared by Render and Scan
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IconArgs {
    /// Class prefix for generated classes (overrides `icons.class_prefix`)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Extra classes appended to every icon (comma-separated, overrides `icons.additional_classes`)
    #[arg(long = "class", value_delimiter = ',')]
    pub classes: Option<Vec<String>>,
}

impl Cli {
    /// Whether `--config` was left at its default (an optional file).
    pub fn uses_default_config(&self) -> bool {
        self.config.as_os_str() == crate::config::CONFIG_FILE
    }

    pub fn icon_args(&self) -> &IconArgs {
        match &self.command {
            Commands::Render { args } => &args.icons,
            Commands::Scan { args } => &args.icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "fa-shortcode",
            "render",
            "a.md",
            "docs",
            "-o",
            "out",
            "--prefix",
            "icon",
            "--class",
            "custom,large",
        ]);
        let Commands::Render { args } = &cli.command else {
            panic!("expected render");
        };

        assert_eq!(args.paths, vec![PathBuf::from("a.md"), PathBuf::from("docs")]);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.icons.prefix.as_deref(), Some("icon"));
        assert_eq!(
            args.icons.classes,
            Some(vec!["custom".to_string(), "large".to_string()])
        );
        assert!(cli.uses_default_config());
    }

    #[test]
    fn test_parse_scan_alias() {
        let cli = Cli::parse_from(["fa-shortcode", "-C", "site.toml", "s", "--pretty", "-f", "markdown"]);
        let Commands::Scan { args } = &cli.command else {
            panic!("expected scan");
        };

        assert!(args.pretty);
        assert_eq!(args.format, Some(InputFormat::Markdown));
        assert!(args.paths.is_empty());
        assert!(!cli.uses_default_config());
        assert!(cli.icon_args().prefix.is_none());
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::parse_from(["fa-shortcode", "render", "-C", "site.toml", "a.md"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(!cli.uses_default_config());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["fa-shortcode", "render", "-v", "-"]);
        assert!(cli.verbose);
    }
}
