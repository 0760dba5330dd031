//! Error types for loading, validating and rendering theme configuration

use crate::loader::ConfigFormat;
use crate::palette::ShadeKey;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading or writing a config file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed in the given format
    #[error("failed to parse {format} config: {message}")]
    Parse {
        /// Format the parser expected
        format: ConfigFormat,
        /// Parser message
        message: String,
    },

    /// The configuration could not be serialized
    #[error("failed to serialize {format} config: {message}")]
    Serialize {
        /// Target format
        format: ConfigFormat,
        /// Serializer message
        message: String,
    },

    /// File extension does not map to a known format
    #[error("unsupported config format for {0} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// Format is known but its cargo feature is disabled
    #[error("{0} support is not enabled in this build")]
    FormatDisabled(ConfigFormat),


    /// Layers parsed on their own but their merge does not form a record
    #[error("failed to merge {layers} layered config files: {message}")]
    Layered {
        /// Number of files merged
        layers: usize,
        /// Deserializer message
        message: String,
    },

    /// A single value (usually from the environment) is invalid
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// Name of the field or variable
        field: String,
        /// Offending value
        value: String,
    },

    /// A content glob failed to compile
    #[error("invalid content glob '{pattern}': {source}")]
    Glob {
        /// The glob as written in the config
        pattern: String,
        /// Compiler error
        #[source]
        source: globset::Error,
    },

    /// The record parsed but breaks one or more invariants
    #[error("invalid configuration:\n{0}")]
    Validation(#[from] ValidationErrors),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A single invariant violation found by [`crate::ThemeConfiguration::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No content globs at all; the generator would scan nothing
    #[error("content list is empty; no files would be scanned")]
    NoContent,

    /// A content glob is an empty string (or only `!`)
    #[error("content glob #{index} is empty")]
    EmptyGlob {
        /// Position in the content list
        index: usize,
    },

    /// A content glob does not compile
    #[error("content glob '{pattern}' is invalid: {reason}")]
    InvalidGlob {
        /// The glob as written
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// A palette does not define exactly the standard shade scale
    #[error("palette '{palette}' is missing shades {}", format_shades(.missing))]
    IncompletePalette {
        /// Palette name
        palette: String,
        /// Shades absent from the palette
        missing: Vec<ShadeKey>,
    },

    /// A palette or token name contains characters the generator cannot use in a class name
    #[error("{kind} name '{name}' is invalid; use letters, digits, '-' or '_'")]
    InvalidTokenName {
        /// Which map the name belongs to (palette, shadow, radius)
        kind: &'static str,
        /// Offending name
        name: String,
    },

    /// A plugin reference is empty
    #[error("plugin reference #{index} is empty")]
    EmptyPlugin {
        /// Position in the plugin list
        index: usize,
    },
}

fn format_shades(shades: &[ShadeKey]) -> String {
    shades
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every violation found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap a list of violations
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    /// The individual violations, in discovery order
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was reported
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to `Ok(())` when empty
    pub fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Errors produced when parsing individual token values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Not a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` color
    #[error("'{0}' is not a hex color (expected #rgb, #rgba, #rrggbb or #rrggbbaa)")]
    Color(String),

    /// Not one of the standard shade steps
    #[error("'{0}' is not a shade key (expected one of 50, 100, 200, ..., 900)")]
    ShadeKey(String),

    /// Not a CSS length
    #[error("'{0}' is not a measurement (expected 0 or a number with a CSS length unit)")]
    Measurement(String),

    /// Not a box-shadow expression
    #[error("'{value}' is not a shadow expression: {reason}")]
    Shadow {
        /// The expression as written
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Unknown dark-mode strategy
    #[error("'{0}' is not a dark mode strategy (expected media, class or selector)")]
    DarkMode(String),
}
