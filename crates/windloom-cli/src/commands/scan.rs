use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::CliConfig;

/// List the files the content globs select under `root`
pub async fn execute(config: CliConfig, root: PathBuf) -> Result<()> {
    let globs = config.theme.content_globs();
    let report = globs
        .scan(&root)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    for file in &report.files {
        println!("{}", file.display());
    }

    // Summary goes to stderr so the file list can be piped
    eprintln!(
        "{}",
        format!(
            "{} of {} files matched {} glob(s) under {}",
            report.files.len(),
            report.visited,
            globs.len(),
            report.root.display()
        )
        .dimmed()
    );
    if report.errors > 0 {
        eprintln!(
            "{} {} entries could not be read",
            "Warning:".yellow().bold(),
            report.errors
        );
    }

    Ok(())
}
