use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;
use windloom_config::{json_schema, render_config_module, render_css_variables};

use crate::cli::EmitKind;
use crate::config::CliConfig;

/// Render an artifact and write it to a file or stdout
pub async fn execute(
    config: CliConfig,
    kind: EmitKind,
    out: Option<PathBuf>,
    working_dir: &Path,
) -> Result<()> {
    let rendered = match kind {
        EmitKind::Js => render_config_module(&config.theme),
        EmitKind::Css => render_css_variables(&config.theme),
        EmitKind::Schema => {
            let mut schema = serde_json::to_string_pretty(&json_schema())
                .context("Failed to serialize JSON schema")?;
            schema.push('\n');
            schema
        }
    };

    let out_path = out.unwrap_or_else(|| working_dir.join(kind.default_file_name()));
    if out_path.as_os_str() == "-" {
        print!("{}", rendered);
        return Ok(());
    }

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    tokio::fs::write(&out_path, &rendered)
        .await
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    debug!("Wrote {} bytes to {}", rendered.len(), out_path.display());
    println!(
        "{} Wrote {} from {}",
        "Success:".green().bold(),
        out_path.display(),
        config.source
    );
    Ok(())
}
