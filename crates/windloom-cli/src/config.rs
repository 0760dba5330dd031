//! Resolving the effective theme configuration for a CLI invocation
//!
//! Precedence: built-in brand theme < config file(s) < WINDLOOM_DARK_MODE < --dark-mode

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use windloom_config::{ConfigError, ConfigFormat, ConfigLoader, DarkModeStrategy, ThemeConfiguration};

use crate::cli::DocumentFormat;

impl From<DocumentFormat> for ConfigFormat {
    fn from(format: DocumentFormat) -> Self {
        match format {
            DocumentFormat::Toml => ConfigFormat::Toml,
            DocumentFormat::Json => ConfigFormat::Json,
            DocumentFormat::Yaml => ConfigFormat::Yaml,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Paths given with `-C`, in layering order
    Files(Vec<PathBuf>),
    /// A `windloom.*` file found in the working directory
    Discovered(PathBuf),
    /// No file; the built-in brand theme
    BuiltIn,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Files(paths) => {
                let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "{}", names.join(" + "))
            }
            ConfigSource::Discovered(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => f.write_str("built-in brand theme"),
        }
    }
}

/// The configuration a command operates on
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Validated configuration with overrides applied
    pub theme: ThemeConfiguration,
    /// Where it was loaded from
    pub source: ConfigSource,
}

impl CliConfig {
    /// Load configuration with precedence: defaults < file < env < args
    pub async fn load(
        config_files: &[PathBuf],
        dark_mode: Option<DarkModeStrategy>,
        working_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let (theme, source) = match config_files {
            [] => match ConfigLoader::discover(working_dir) {
                Some(path) => {
                    let theme = ConfigLoader::load_from_file(&path).await?;
                    (theme, ConfigSource::Discovered(path))
                }
                None => {
                    debug!("No config file in {}, using built-in theme", working_dir.display());
                    (ThemeConfiguration::brand(), ConfigSource::BuiltIn)
                }
            },
            [single] => {
                let theme = ConfigLoader::load_from_file(single).await?;
                (theme, ConfigSource::Files(vec![single.clone()]))
            }
            layers => {
                let theme = ConfigLoader::load_layered(layers)?;
                (theme, ConfigSource::Files(layers.to_vec()))
            }
        };

        // Override with env vars
        let theme = ConfigLoader::with_env_overrides(theme)?;

        // Override with CLI args (highest priority)
        let theme = match dark_mode {
            Some(strategy) => theme.with_dark_mode(strategy),
            None => theme,
        };

        debug!("Effective configuration from {}", source);
        Ok(Self { theme, source })
    }
}
