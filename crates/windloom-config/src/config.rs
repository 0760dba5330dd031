//! The theme configuration record
//!
//! Field names follow the generator's own config spelling, so a serialized
//! record reads like the file the generator expects:
//!
//! ```toml
//! darkMode = "class"
//! content = ["./**/templates/**/*.html", "./dashboard/static/**/*.js"]
//! plugins = []
//!
//! [theme.container]
//! center = true
//! padding = "1rem"
//!
//! [theme.extend.colors.brand]
//! 500 = "#2f74ff"
//!
//! [theme.extend.boxShadow]
//! soft = "0 10px 30px rgba(0,0,0,.08)"
//!
//! [theme.extend.borderRadius]
//! xl = "1rem"
//! ```

use crate::container::ContainerSettings;
use crate::content::ContentGlobs;
use crate::dark_mode::DarkModeStrategy;
use crate::error::{ValidationError, ValidationErrors};
use crate::palette::{Color, Palette, PaletteExtension, ShadeKey};
use crate::tokens::{is_valid_token_name, Measurement, RadiusExtension, ShadowExpr, ShadowExtension};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a generator plugin (a module specifier such as `@tailwindcss/forms`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// Create a plugin reference
    pub fn new(specifier: impl Into<String>) -> Self {
        Self(specifier.into())
    }

    /// Module specifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values merged into the generator's default design tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeExtension {
    /// Named palettes (`theme.extend.colors`)
    pub colors: PaletteExtension,
    /// Named shadows (`theme.extend.boxShadow`)
    pub box_shadow: ShadowExtension,
    /// Named radii (`theme.extend.borderRadius`)
    pub border_radius: RadiusExtension,
}

/// The `theme` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ThemeSection {
    /// Container utility settings
    pub container: ContainerSettings,
    /// Token extensions
    pub extend: ThemeExtension,
}

/// Complete configuration handed to the utility-class generator
///
/// The record is immutable once built or loaded; use
/// [`ThemeConfiguration::builder`] to assemble one in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfiguration {
    dark_mode: DarkModeStrategy,
    content: ContentGlobs,
    theme: ThemeSection,
    plugins: Vec<PluginRef>,
}

impl ThemeConfiguration {
    /// Start building a configuration from the generator defaults
    pub fn builder() -> ThemeConfigurationBuilder {
        ThemeConfigurationBuilder::default()
    }

    /// The brand theme: class-toggled dark mode, Django template and static
    /// script globs, a centered container and the blue `brand` palette.
    pub fn brand() -> Self {
        let palette = [
            (ShadeKey::S50, "#eef6ff"),
            (ShadeKey::S100, "#d9e9ff"),
            (ShadeKey::S200, "#b6d3ff"),
            (ShadeKey::S300, "#86b4ff"),
            (ShadeKey::S400, "#5492ff"),
            (ShadeKey::S500, "#2f74ff"),
            (ShadeKey::S600, "#1b59e0"),
            (ShadeKey::S700, "#1748b6"),
            (ShadeKey::S800, "#143d94"),
            (ShadeKey::S900, "#0f2e6e"),
        ]
        .into_iter()
        .map(|(key, hex)| (key, Color::from_static(hex)))
        .collect::<Palette>();

        Self {
            dark_mode: DarkModeStrategy::Class,
            content: ContentGlobs::new(["./**/templates/**/*.html", "./dashboard/static/**/*.js"]),
            theme: ThemeSection {
                container: ContainerSettings::centered(Measurement::from_static("1rem")),
                extend: ThemeExtension {
                    colors: PaletteExtension::new().with_palette("brand", palette),
                    box_shadow: ShadowExtension::new()
                        .with_token("soft", ShadowExpr::from_static("0 10px 30px rgba(0,0,0,.08)"))
                        .with_token("focus", ShadowExpr::from_static("0 0 0 3px rgba(47,116,255,.35)")),
                    border_radius: RadiusExtension::new()
                        .with_token("xl", Measurement::from_static("1rem"))
                        .with_token("2xl", Measurement::from_static("1.25rem")),
                },
            },
            plugins: Vec::new(),
        }
    }

    /// How `dark:` variants are activated
    pub fn dark_mode_strategy(&self) -> DarkModeStrategy {
        self.dark_mode
    }

    /// Globs selecting the files to scan for class names
    pub fn content_globs(&self) -> &ContentGlobs {
        &self.content
    }

    /// Container utility settings
    pub fn container_settings(&self) -> &ContainerSettings {
        &self.theme.container
    }

    /// The whole `theme.extend` section
    pub fn extension(&self) -> &ThemeExtension {
        &self.theme.extend
    }

    /// Named palettes
    pub fn palette_extension(&self) -> &PaletteExtension {
        &self.theme.extend.colors
    }

    /// Named shadows
    pub fn shadow_extension(&self) -> &ShadowExtension {
        &self.theme.extend.box_shadow
    }

    /// Named radii
    pub fn radius_extension(&self) -> &RadiusExtension {
        &self.theme.extend.border_radius
    }

    /// Plugin references in load order
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    /// Look up a palette by name
    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.palette_extension().get(name)
    }

    /// Look up one shade of a palette, e.g. `shade("brand", ShadeKey::S500)`
    pub fn shade(&self, palette: &str, key: ShadeKey) -> Option<&Color> {
        self.palette_extension().shade(palette, key)
    }

    /// Look up a shadow token
    pub fn shadow(&self, name: &str) -> Option<&ShadowExpr> {
        self.shadow_extension().get(name)
    }

    /// Look up a radius token
    pub fn radius(&self, name: &str) -> Option<&Measurement> {
        self.radius_extension().get(name)
    }

    /// The same configuration with a different dark-mode strategy
    pub fn with_dark_mode(mut self, strategy: DarkModeStrategy) -> Self {
        self.dark_mode = strategy;
        self
    }

    /// Check every invariant, collecting all violations
    ///
    /// Colors, measurements and shadow expressions are checked when they are
    /// parsed, so this pass covers what only makes sense on the whole record:
    /// globs, palette completeness, token names and plugin references.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.content.validate();

        for (name, palette) in self.palette_extension().iter() {
            if !is_valid_token_name(name) {
                errors.push(ValidationError::InvalidTokenName {
                    kind: "palette",
                    name: name.to_string(),
                });
            }
            if !palette.is_complete() {
                errors.push(ValidationError::IncompletePalette {
                    palette: name.to_string(),
                    missing: palette.missing_shades(),
                });
            }
        }

        let token_names = self
            .shadow_extension()
            .names()
            .map(|name| ("shadow", name))
            .chain(self.radius_extension().names().map(|name| ("radius", name)));
        for (kind, name) in token_names {
            if !is_valid_token_name(name) {
                errors.push(ValidationError::InvalidTokenName {
                    kind,
                    name: name.to_string(),
                });
            }
        }

        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.as_str().trim().is_empty() {
                errors.push(ValidationError::EmptyPlugin { index });
            }
        }

        ValidationErrors::new(errors).into_result()
    }
}

/// Builder for [`ThemeConfiguration`]
///
/// ```rust
/// use windloom_config::{Color, DarkModeStrategy, ShadeKey, ThemeConfiguration};
///
/// let config = ThemeConfiguration::builder()
///     .dark_mode(DarkModeStrategy::Class)
///     .content("./src/**/*.rs")
///     .shades("accent", ShadeKey::ALL.map(|key| (key, "#ff8800".parse::<Color>().unwrap())))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.shade("accent", ShadeKey::S500).unwrap(), &"#ff8800");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeConfigurationBuilder {
    config: ThemeConfiguration,
}

impl ThemeConfigurationBuilder {
    /// Set the dark-mode strategy
    pub fn dark_mode(mut self, strategy: DarkModeStrategy) -> Self {
        self.config.dark_mode = strategy;
        self
    }

    /// Append a content glob
    pub fn content(mut self, pattern: impl Into<String>) -> Self {
        self.config.content.push(pattern.into());
        self
    }

    /// Set container settings
    pub fn container(mut self, container: ContainerSettings) -> Self {
        self.config.theme.container = container;
        self
    }

    /// Add or replace a palette
    pub fn palette(mut self, name: impl Into<String>, palette: Palette) -> Self {
        self.config.theme.extend.colors.insert(name.into(), palette);
        self
    }

    /// Add or replace a palette from `(shade, color)` pairs
    pub fn shades(
        self,
        name: impl Into<String>,
        shades: impl IntoIterator<Item = (ShadeKey, Color)>,
    ) -> Self {
        self.palette(name, shades.into_iter().collect())
    }

    /// Add or replace a shadow token
    pub fn shadow(mut self, name: impl Into<String>, shadow: ShadowExpr) -> Self {
        self.config.theme.extend.box_shadow.insert(name.into(), shadow);
        self
    }

    /// Add or replace a radius token
    pub fn radius(mut self, name: impl Into<String>, radius: Measurement) -> Self {
        self.config.theme.extend.border_radius.insert(name.into(), radius);
        self
    }

    /// Append a plugin reference
    pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
        self.config.plugins.push(PluginRef::new(plugin));
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<ThemeConfiguration, ValidationErrors> {
        self.config.validate()?;
        Ok(self.config)
    }
}
