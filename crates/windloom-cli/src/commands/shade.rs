use anyhow::{anyhow, Context, Result};
use windloom_config::ShadeKey;

use crate::config::CliConfig;

/// Print a single palette color, e.g. `windloom shade brand 500`
pub async fn execute(config: CliConfig, palette: String, key: String) -> Result<()> {
    let key: ShadeKey = key
        .parse()
        .with_context(|| format!("Invalid shade key for palette '{}'", palette))?;

    let theme = &config.theme;
    let shades = theme.palette(&palette).ok_or_else(|| {
        let available: Vec<&str> = theme.palette_extension().iter().map(|(name, _)| name).collect();
        anyhow!(
            "No palette named '{}' (available: {})",
            palette,
            if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            }
        )
    })?;

    let color = shades
        .get(key)
        .ok_or_else(|| anyhow!("Palette '{}' has no shade {}", palette, key))?;

    println!("{}", color);
    Ok(())
}
