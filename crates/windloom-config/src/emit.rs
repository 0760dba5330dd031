//! Rendering a configuration for the generator and for stylesheets

use crate::config::ThemeConfiguration;
use schemars::schema_for;
use std::fmt::Write;

/// Type annotation the generator's editor tooling understands
const CONFIG_TYPE_COMMENT: &str = "/** @type {import('tailwindcss').Config} */";

/// A JavaScript literal as written in the config module
enum Js {
    Str(String),
    Bool(bool),
    Raw(String),
    Array(Vec<Js>),
    Object(Vec<(String, Js)>),
}

impl Js {
    fn str(value: impl Into<String>) -> Self {
        Js::Str(value.into())
    }

    fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Js)>) -> Self {
        Js::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    fn write(&self, out: &mut String, indent: usize) {
        match self {
            Js::Str(value) => out.push_str(&quote(value)),
            Js::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
            Js::Raw(value) => out.push_str(value),
            Js::Array(items) if items.is_empty() => out.push_str("[]"),
            Js::Object(entries) if entries.is_empty() => out.push_str("{}"),
            Js::Array(items) => {
                out.push_str("[\n");
                for item in items {
                    pad(out, indent + 1);
                    item.write(out, indent + 1);
                    out.push_str(",\n");
                }
                pad(out, indent);
                out.push(']');
            }
            Js::Object(entries) => {
                out.push_str("{\n");
                for (key, value) in entries {
                    pad(out, indent + 1);
                    out.push_str(&object_key(key));
                    out.push_str(": ");
                    value.write(out, indent + 1);
                    out.push_str(",\n");
                }
                pad(out, indent);
                out.push('}');
            }
        }
    }
}

fn pad(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Identifiers and plain integers can be bare keys; anything else is quoted.
fn object_key(key: &str) -> String {
    let is_identifier = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    let is_integer = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));

    if is_identifier || is_integer {
        key.to_string()
    } else {
        quote(key)
    }
}

fn config_literal(config: &ThemeConfiguration) -> Js {
    let container = config.container_settings();
    let extension = config.extension();

    let colors = Js::object(extension.colors.iter().map(|(name, palette)| {
        let shades = palette
            .iter()
            .map(|(key, color)| (key.to_string(), Js::str(color.as_str())));
        (name, Js::object(shades))
    }));
    let shadows = Js::object(
        extension
            .box_shadow
            .iter()
            .map(|(name, shadow)| (name, Js::str(shadow.as_str()))),
    );
    let radii = Js::object(
        extension
            .border_radius
            .iter()
            .map(|(name, radius)| (name, Js::str(radius.as_str()))),
    );

    Js::object([
        ("darkMode", Js::str(config.dark_mode_strategy().as_str())),
        (
            "content",
            Js::Array(config.content_globs().iter().map(Js::str).collect()),
        ),
        (
            "theme",
            Js::object([
                (
                    "container",
                    Js::object([
                        ("center", Js::Bool(container.center)),
                        ("padding", Js::str(container.padding.as_str())),
                    ]),
                ),
                (
                    "extend",
                    Js::object([
                        ("colors", colors),
                        ("boxShadow", shadows),
                        ("borderRadius", radii),
                    ]),
                ),
            ]),
        ),
        (
            "plugins",
            Js::Array(
                config
                    .plugins()
                    .iter()
                    .map(|plugin| Js::Raw(format!("require({})", quote(plugin.as_str()))))
                    .collect(),
            ),
        ),
    ])
}

/// Render the CommonJS config module the generator loads
/// (`tailwind.config.js`).
pub fn render_config_module(config: &ThemeConfiguration) -> String {
    let mut out = String::new();
    out.push_str(CONFIG_TYPE_COMMENT);
    out.push('\n');
    out.push_str("module.exports = ");
    config_literal(config).write(&mut out, 0);
    out.push_str(";\n");
    out
}

/// Render the design tokens as CSS custom properties on `:root`
///
/// Properties are named `--color-<palette>-<shade>`, `--shadow-<name>` and
/// `--radius-<name>`.
pub fn render_css_variables(config: &ThemeConfiguration) -> String {
    let mut out = String::from(":root {\n");

    for (name, palette) in config.palette_extension().iter() {
        for (key, color) in palette.iter() {
            let _ = writeln!(out, "  --color-{}-{}: {};", name, key, color);
        }
    }
    for (name, shadow) in config.shadow_extension().iter() {
        let _ = writeln!(out, "  --shadow-{}: {};", name, shadow);
    }
    for (name, radius) in config.radius_extension().iter() {
        let _ = writeln!(out, "  --radius-{}: {};", name, radius);
    }
    let _ = writeln!(out, "  --container-padding: {};", config.container_settings().padding);

    out.push_str("}\n");
    out
}

/// JSON Schema describing the configuration file
pub fn json_schema() -> serde_json::Value {
    let schema = schema_for!(ThemeConfiguration);
    serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_module_for_brand() {
        let rendered = render_config_module(&ThemeConfiguration::brand());

        let expected = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: 'class',
  content: [
    './**/templates/**/*.html',
    './dashboard/static/**/*.js',
  ],
  theme: {
    container: {
      center: true,
      padding: '1rem',
    },
    extend: {
      colors: {
        brand: {
          50: '#eef6ff',
          100: '#d9e9ff',
          200: '#b6d3ff',
          300: '#86b4ff',
          400: '#5492ff',
          500: '#2f74ff',
          600: '#1b59e0',
          700: '#1748b6',
          800: '#143d94',
          900: '#0f2e6e',
        },
      },
      boxShadow: {
        focus: '0 0 0 3px rgba(47,116,255,.35)',
        soft: '0 10px 30px rgba(0,0,0,.08)',
      },
      borderRadius: {
        '2xl': '1.25rem',
        xl: '1rem',
      },
    },
  },
  plugins: [],
};
"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn plugins_render_as_require_calls() {
        let config = ThemeConfiguration::builder()
            .content("./src/**/*.html")
            .plugin("@tailwindcss/forms")
            .build()
            .unwrap();

        let rendered = render_config_module(&config);
        assert!(rendered.contains("  plugins: [\n    require('@tailwindcss/forms'),\n  ],\n"));
        assert!(rendered.contains("colors: {},"));
    }

    #[test]
    fn keys_and_strings_are_escaped() {
        assert_eq!(object_key("boxShadow"), "boxShadow");
        assert_eq!(object_key("500"), "500");
        assert_eq!(object_key("2xl"), "'2xl'");
        assert_eq!(object_key("05"), "'05'");
        assert_eq!(object_key("focus-ring"), "'focus-ring'");
        assert_eq!(quote("it's"), r"'it\'s'");
    }

    #[test]
    fn css_variables_for_brand() {
        let css = render_css_variables(&ThemeConfiguration::brand());

        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-brand-50: #eef6ff;\n"));
        assert!(css.contains("  --color-brand-500: #2f74ff;\n"));
        assert!(css.contains("  --shadow-soft: 0 10px 30px rgba(0,0,0,.08);\n"));
        assert!(css.contains("  --radius-2xl: 1.25rem;\n"));
        assert!(css.contains("  --container-padding: 1rem;\n"));
        assert!(css.ends_with("}\n"));

        let first = css.find("--color-brand-50:").unwrap();
        let last = css.find("--color-brand-900:").unwrap();
        assert!(first < last);
    }

    #[test]
    fn schema_describes_top_level_fields() {
        let schema = json_schema();
        let properties = schema["properties"].as_object().unwrap();

        for field in ["darkMode", "content", "theme", "plugins"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
