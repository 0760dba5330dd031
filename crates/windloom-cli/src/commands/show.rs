use anyhow::{Context, Result};
use windloom_config::{render_config_module, render_css_variables, ConfigFormat, ConfigLoader};

use crate::cli::ShowFormat;
use crate::config::CliConfig;

/// Print the effective configuration
pub async fn execute(config: CliConfig, format: ShowFormat) -> Result<()> {
    let rendered = match format {
        ShowFormat::Toml => render(&config, ConfigFormat::Toml)?,
        ShowFormat::Json => render(&config, ConfigFormat::Json)?,
        ShowFormat::Yaml => render(&config, ConfigFormat::Yaml)?,
        ShowFormat::Js => render_config_module(&config.theme),
        ShowFormat::Css => render_css_variables(&config.theme),
    };

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn render(config: &CliConfig, format: ConfigFormat) -> Result<String> {
    ConfigLoader::render(&config.theme, format)
        .with_context(|| format!("Failed to serialize config as {}", format))
}
