//! Loading and saving theme configuration files
//!
//! The format is picked from the file extension:
//!
//! | Extension         | Format | Cargo feature |
//! |-------------------|--------|---------------|
//! | `.toml`           | TOML   | `toml`        |
//! | `.json`           | JSON   | always        |
//! | `.yaml` / `.yml`  | YAML   | `yaml`        |
//!
//! Every load validates the record, so callers never see a configuration
//! that breaks its invariants.

use crate::config::ThemeConfiguration;
use crate::error::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Canonical file extension
    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        })
    }
}

fn parse_error(format: ConfigFormat, error: impl fmt::Display) -> ConfigError {
    ConfigError::Parse {
        format,
        message: error.to_string(),
    }
}

fn serialize_error(format: ConfigFormat, error: impl fmt::Display) -> ConfigError {
    ConfigError::Serialize {
        format,
        message: error.to_string(),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(feature = "toml")]
fn from_toml<T: DeserializeOwned>(text: &str) -> ConfigResult<T> {
    toml::from_str(text).map_err(|e| parse_error(ConfigFormat::Toml, e))
}

#[cfg(not(feature = "toml"))]
fn from_toml<T: DeserializeOwned>(_text: &str) -> ConfigResult<T> {
    Err(ConfigError::FormatDisabled(ConfigFormat::Toml))
}

#[cfg(feature = "toml")]
fn to_toml(config: &ThemeConfiguration) -> ConfigResult<String> {
    toml::to_string_pretty(config).map_err(|e| serialize_error(ConfigFormat::Toml, e))
}

#[cfg(not(feature = "toml"))]
fn to_toml(_config: &ThemeConfiguration) -> ConfigResult<String> {
    Err(ConfigError::FormatDisabled(ConfigFormat::Toml))
}

#[cfg(feature = "yaml")]
fn from_yaml<T: DeserializeOwned>(text: &str) -> ConfigResult<T> {
    serde_yaml::from_str(text).map_err(|e| parse_error(ConfigFormat::Yaml, e))
}

#[cfg(not(feature = "yaml"))]
fn from_yaml<T: DeserializeOwned>(_text: &str) -> ConfigResult<T> {
    Err(ConfigError::FormatDisabled(ConfigFormat::Yaml))
}

// YAML maps may have integer keys (`500: '#2f74ff'`), which `serde_json::Value`
// cannot take directly; going through `serde_yaml::Value` stringifies them.
#[cfg(feature = "yaml")]
fn yaml_document(text: &str) -> ConfigResult<Value> {
    let value: serde_yaml::Value = from_yaml(text)?;
    serde_json::to_value(value).map_err(|e| parse_error(ConfigFormat::Yaml, e))
}

#[cfg(not(feature = "yaml"))]
fn yaml_document(_text: &str) -> ConfigResult<Value> {
    Err(ConfigError::FormatDisabled(ConfigFormat::Yaml))
}

#[cfg(feature = "yaml")]
fn to_yaml(config: &ThemeConfiguration) -> ConfigResult<String> {
    serde_yaml::to_string(config).map_err(|e| serialize_error(ConfigFormat::Yaml, e))
}

#[cfg(not(feature = "yaml"))]
fn to_yaml(_config: &ThemeConfiguration) -> ConfigResult<String> {
    Err(ConfigError::FormatDisabled(ConfigFormat::Yaml))
}

/// Merge `overlay` into `target`
///
/// Objects merge key by key, arrays append entries not already present,
/// `null` (an empty YAML document or key) leaves `target` alone, anything
/// else is replaced.
fn merge_values(target: &mut Value, overlay: Value) {
    match (target, overlay) {
        (_, Value::Null) => {}
        (Value::Object(target), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match target.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(overlay)) => {
            for item in overlay {
                if !target.contains(&item) {
                    target.push(item);
                }
            }
        }
        (target, overlay) => *target = overlay,
    }
}

/// Loads, saves and discovers theme configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// File names tried by [`ConfigLoader::discover`], in order
    pub const CANDIDATES: [&'static str; 4] = [
        "windloom.toml",
        "windloom.json",
        "windloom.yaml",
        "windloom.yml",
    ];

    /// Environment variable overriding the dark-mode strategy
    pub const DARK_MODE_ENV: &'static str = "WINDLOOM_DARK_MODE";

    /// Parse and validate a document
    pub fn parse(text: &str, format: ConfigFormat) -> ConfigResult<ThemeConfiguration> {
        let config: ThemeConfiguration = match format {
            ConfigFormat::Toml => from_toml(text)?,
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(|e| parse_error(format, e))?
            }
            ConfigFormat::Yaml => from_yaml(text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize a configuration
    pub fn render(config: &ThemeConfiguration, format: ConfigFormat) -> ConfigResult<String> {
        match format {
            ConfigFormat::Toml => to_toml(config),
            ConfigFormat::Json => {
                serde_json::to_string_pretty(config).map_err(|e| serialize_error(format, e))
            }
            ConfigFormat::Yaml => to_yaml(config),
        }
    }

    /// Load a configuration file
    pub async fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<ThemeConfiguration> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading {} config from {}", format, path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error(path, e))?;
        let config = Self::parse(&content, format)?;

        info!("Loaded theme configuration from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file synchronously (for non-async contexts)
    pub fn load_from_file_sync(path: impl AsRef<Path>) -> ConfigResult<ThemeConfiguration> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading {} config from {}", format, path.display());

        let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        let config = Self::parse(&content, format)?;

        info!("Loaded theme configuration from {}", path.display());
        Ok(config)
    }

    /// Save a configuration in the format implied by the path
    ///
    /// Creates missing parent directories.
    pub async fn save_to_file(
        config: &ThemeConfiguration,
        path: impl AsRef<Path>,
    ) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = Self::render(config, ConfigFormat::from_path(path)?)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| io_error(path, e))?;

        info!("Saved theme configuration to {}", path.display());
        Ok(())
    }

    /// Save a configuration synchronously (for non-async contexts)
    pub fn save_to_file_sync(config: &ThemeConfiguration, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = Self::render(config, ConfigFormat::from_path(path)?)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| io_error(path, e))?;

        info!("Saved theme configuration to {}", path.display());
        Ok(())
    }

    /// Load several files, later ones layered over earlier ones
    ///
    /// Maps merge key by key (so a later file can add a palette or replace a
    /// single shadow), lists such as `content` gain the new entries, and
    /// scalars such as `darkMode` are replaced. The merged record is
    /// validated once at the end.
    pub fn load_layered<P: AsRef<Path>>(paths: &[P]) -> ConfigResult<ThemeConfiguration> {
        let mut merged = Value::Object(serde_json::Map::new());

        for path in paths {
            let path = path.as_ref();
            let format = ConfigFormat::from_path(path)?;
            let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;

            debug!("Layering {} config from {}", format, path.display());
            merge_values(&mut merged, Self::parse_layer(&content, format)?);
        }

        let config: ThemeConfiguration =
            serde_json::from_value(merged).map_err(|e| ConfigError::Layered {
                layers: paths.len(),
                message: e.to_string(),
            })?;
        config.validate()?;

        info!("Loaded theme configuration from {} layers", paths.len());
        Ok(config)
    }

    /// Parse one layer into a mergeable document
    ///
    /// The layer is first read as a typed record (without validation) so that
    /// malformed values and duplicate shade keys are reported against the file
    /// they appear in instead of disappearing in the merge.
    fn parse_layer(content: &str, format: ConfigFormat) -> ConfigResult<Value> {
        match format {
            ConfigFormat::Toml => {
                from_toml::<ThemeConfiguration>(content)?;
                from_toml::<Value>(content)
            }
            ConfigFormat::Json => {
                serde_json::from_str::<ThemeConfiguration>(content)
                    .map_err(|e| parse_error(format, e))?;
                serde_json::from_str(content).map_err(|e| parse_error(format, e))
            }
            ConfigFormat::Yaml => {
                from_yaml::<ThemeConfiguration>(content)?;
                yaml_document(content)
            }
        }
    }

    /// Find the first `windloom.*` config file in `dir`
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(config: ThemeConfiguration) -> ConfigResult<ThemeConfiguration> {
        Self::with_overrides_from(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from(
        mut config: ThemeConfiguration,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<ThemeConfiguration> {
        if let Some(value) = lookup(Self::DARK_MODE_ENV) {
            let strategy = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: Self::DARK_MODE_ENV.to_string(),
                value: value.clone(),
            })?;
            debug!("Dark mode overridden to {} from environment", strategy);
            config = config.with_dark_mode(strategy);
        }
        Ok(config)
    }
}
