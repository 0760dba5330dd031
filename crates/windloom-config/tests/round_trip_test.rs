//! Serialization round-trip tests
//!
//! A record written in any supported format must parse back to an identical
//! structure, and the document itself should read like the generator's config.

use windloom_config::{
    Color, ConfigFormat, ConfigLoader, ContainerSettings, DarkModeStrategy, Measurement,
    ShadeKey, ShadowExpr, ThemeConfiguration,
};

fn rich_config() -> ThemeConfiguration {
    let accent = ShadeKey::ALL.map(|key| {
        let hex = format!("#{:02x}8800", key.value() / 4);
        (key, hex.parse::<Color>().unwrap())
    });

    ThemeConfiguration::builder()
        .dark_mode(DarkModeStrategy::Selector)
        .content("./**/templates/**/*.html")
        .content("./dashboard/static/**/*.js")
        .content("!./dashboard/static/vendor/**")
        .container(ContainerSettings::centered("2rem".parse::<Measurement>().unwrap()))
        .shades("accent", accent)
        .shadow(
            "layered",
            "0 1px 3px 0 #0000001a, 0 1px 2px -1px #0000001a"
                .parse::<ShadowExpr>()
                .unwrap(),
        )
        .radius("0", "0".parse::<Measurement>().unwrap())
        .radius("pill", "9999px".parse::<Measurement>().unwrap())
        .plugin("@tailwindcss/forms")
        .build()
        .unwrap()
}

#[test]
fn test_brand_round_trip_all_formats() {
    let brand = ThemeConfiguration::brand();

    for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
        let text = ConfigLoader::render(&brand, format).expect("Failed to render brand config");
        println!("=== {} ===\n{}\n", format, text);

        let parsed = ConfigLoader::parse(&text, format).expect("Failed to parse rendered config");
        assert_eq!(parsed, brand, "{} round trip changed the record", format);
    }
}

#[test]
fn test_rich_config_round_trip_all_formats() {
    let config = rich_config();

    for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
        let text = ConfigLoader::render(&config, format).expect("Failed to render config");
        let parsed = ConfigLoader::parse(&text, format).expect("Failed to parse rendered config");
        assert_eq!(parsed, config, "{} round trip changed the record", format);

        // Rendering again must be byte-identical
        let again = ConfigLoader::render(&parsed, format).unwrap();
        assert_eq!(again, text);
    }
}

#[test]
fn test_toml_uses_generator_key_names() {
    let text = ConfigLoader::render(&ThemeConfiguration::brand(), ConfigFormat::Toml).unwrap();

    assert!(text.contains("darkMode = \"class\""));
    assert!(text.contains("boxShadow"));
    assert!(text.contains("borderRadius"));
    assert!(!text.contains("dark_mode"));
    assert!(!text.contains("box_shadow"));
}

#[test]
fn test_json_shade_keys_are_strings() {
    let text = ConfigLoader::render(&ThemeConfiguration::brand(), ConfigFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let brand = &value["theme"]["extend"]["colors"]["brand"];
    assert_eq!(brand["500"], "#2f74ff");
    assert_eq!(brand.as_object().unwrap().len(), 10);
}

#[test]
fn test_yaml_with_integer_shade_keys() {
    let yaml = r##"
darkMode: class
content:
  - "./**/templates/**/*.html"
theme:
  extend:
    colors:
      brand:
        50: "#eef6ff"
        100: "#d9e9ff"
        200: "#b6d3ff"
        300: "#86b4ff"
        400: "#5492ff"
        500: "#2f74ff"
        600: "#1b59e0"
        700: "#1748b6"
        800: "#143d94"
        900: "#0f2e6e"
"##;

    let config = ConfigLoader::parse(yaml, ConfigFormat::Yaml).expect("Failed to parse YAML");
    assert_eq!(config.shade("brand", ShadeKey::S500).unwrap(), &"#2f74ff");
    assert_eq!(config.palette("brand"), ThemeConfiguration::brand().palette("brand"));
}
