use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use windloom_config::{ConfigError, DarkModeStrategy};

use crate::config::CliConfig;

/// Load the configuration and report every problem found
pub async fn execute(
    config_files: &[PathBuf],
    dark_mode: Option<DarkModeStrategy>,
    working_dir: &Path,
) -> Result<()> {
    let config = match CliConfig::load(config_files, dark_mode, working_dir).await {
        Ok(config) => config,
        Err(ConfigError::Validation(errors)) => {
            println!("{}", "Configuration is invalid:".red().bold());
            for error in errors.errors() {
                println!("  {} {}", "✗".red(), error);
            }
            bail!("{} problem(s) found", errors.len());
        }
        Err(e) => return Err(e.into()),
    };

    let theme = &config.theme;
    println!(
        "{} {} is valid",
        "✓".green().bold(),
        config.source.to_string().cyan()
    );
    let strategy = theme.dark_mode_strategy();
    println!(
        "  dark mode:     {} {}",
        strategy,
        format!("({})", strategy.variant_selector()).dimmed()
    );
    println!("  content globs: {}", theme.content_globs().len());
    println!("  palettes:      {}", theme.palette_extension().len());
    println!("  shadows:       {}", theme.shadow_extension().len());
    println!("  radii:         {}", theme.radius_extension().len());
    println!("  plugins:       {}", theme.plugins().len());

    Ok(())
}
