//! fa-shortcode - rewrite Font Awesome shortcodes into icon markup.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use fa_shortcode::cli::{self, Cli, Commands};
use fa_shortcode::config::FaConfig;
use fa_shortcode::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Scan { args } => cli::scan::run_scan(args, &config),
    }
}

/// Load `fa.toml`, apply CLI overrides, then validate the result.
fn load_config(cli: &Cli) -> Result<FaConfig> {
    let mut config = FaConfig::load(&cli.config, !cli.uses_default_config())?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    let icons = cli.icon_args();
    config.apply_icon_overrides(icons.prefix.as_ref(), icons.classes.as_ref());
    config.validate()?;

    Ok(config)
}
