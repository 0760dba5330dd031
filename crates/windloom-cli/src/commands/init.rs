use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use windloom_config::{ConfigFormat, ConfigLoader, ThemeConfiguration};

use crate::cli::DocumentFormat;

/// Write the built-in brand theme to a new config file
pub async fn execute(
    path: Option<PathBuf>,
    force: bool,
    format: DocumentFormat,
    working_dir: &Path,
) -> Result<()> {
    let config_path = path.unwrap_or_else(|| {
        let format = ConfigFormat::from(format);
        working_dir.join(format!("windloom.{}", format.extension()))
    });

    if config_path.exists() && !force {
        bail!(
            "Config file already exists at: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    ConfigLoader::save_to_file(&ThemeConfiguration::brand(), &config_path)
        .await
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!(
        "{} Created config file at: {}",
        "Success:".green().bold(),
        config_path.display()
    );
    println!(
        "\n{}",
        "Edit this file to change the palette, tokens and content globs.".dimmed()
    );

    Ok(())
}
