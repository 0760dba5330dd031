//! Color palettes keyed by shade
//!
//! A palette maps the standard lightness scale (50, 100, ..., 900) to hex
//! colors. Palettes are grouped by name in a [`PaletteExtension`], which is
//! what the generator merges into its default color set:
//!
//! ```toml
//! [theme.extend.colors.brand]
//! 50 = "#eef6ff"
//! 500 = "#2f74ff"
//! 900 = "#0f2e6e"
//! ```

use crate::error::ValueError;
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One step of the 50–900 shade scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeKey {
    /// 50
    S50,
    /// 100
    S100,
    /// 200
    S200,
    /// 300
    S300,
    /// 400
    S400,
    /// 500
    S500,
    /// 600
    S600,
    /// 700
    S700,
    /// 800
    S800,
    /// 900
    S900,
}

impl ShadeKey {
    /// The full scale in ascending order
    pub const ALL: [ShadeKey; 10] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
    ];

    /// Numeric value as used in class names (`bg-brand-500`)
    pub fn value(self) -> u16 {
        match self {
            ShadeKey::S50 => 50,
            ShadeKey::S100 => 100,
            ShadeKey::S200 => 200,
            ShadeKey::S300 => 300,
            ShadeKey::S400 => 400,
            ShadeKey::S500 => 500,
            ShadeKey::S600 => 600,
            ShadeKey::S700 => 700,
            ShadeKey::S800 => 800,
            ShadeKey::S900 => 900,
        }
    }
}

impl TryFrom<u64> for ShadeKey {
    type Error = ValueError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        ShadeKey::ALL
            .into_iter()
            .find(|key| u64::from(key.value()) == value)
            .ok_or_else(|| ValueError::ShadeKey(value.to_string()))
    }
}

impl FromStr for ShadeKey {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u64 = s
            .trim()
            .parse()
            .map_err(|_| ValueError::ShadeKey(s.to_string()))?;
        ShadeKey::try_from(number).map_err(|_| ValueError::ShadeKey(s.to_string()))
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// Shade keys travel as map keys, which TOML requires to be strings.
impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a shade key (50, 100, ..., 900)")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
                ShadeKey::try_from(v).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeKey, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(ValueError::ShadeKey(v.to_string())))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

impl JsonSchema for ShadeKey {
    fn schema_name() -> Cow<'static, str> {
        "ShadeKey".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "enum": ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
        })
    }
}

/// A hex color value
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`. The original spelling
/// is preserved so a loaded file serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Wrap a literal that is known to be valid.
    pub(crate) fn from_static(hex: &'static str) -> Self {
        debug_assert!(parse_hex(hex).is_some(), "invalid color literal {hex}");
        Self(hex.to_string())
    }

    /// The color exactly as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b, _] = self.channels();
        (r, g, b)
    }

    /// Alpha channel, if the color carries one
    pub fn alpha(&self) -> Option<u8> {
        match self.0.len() {
            5 | 9 => Some(self.channels()[3]),
            _ => None,
        }
    }

    /// CSS functional notation, e.g. `rgb(47, 116, 255)`
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.rgb();
        match self.alpha() {
            Some(a) => {
                let alpha = f64::from(a) / 255.0;
                format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(alpha))
            }
            None => format!("rgb({}, {}, {})", r, g, b),
        }
    }

    fn channels(&self) -> [u8; 4] {
        // Construction guarantees the string parses.
        parse_hex(&self.0).unwrap_or([0, 0, 0, 255])
    }
}

fn format_alpha(alpha: f64) -> String {
    let rounded = format!("{:.2}", alpha);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_hex(value: &str) -> Option<[u8; 4]> {
    let digits = value.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 | 4 => {
            let mut out = [0, 0, 0, 255];
            for (i, slot) in out.iter_mut().enumerate().take(digits.len()) {
                let n = nibble(i)?;
                *slot = n * 17;
            }
            Some(out)
        }
        6 | 8 => {
            let mut out = [0, 0, 0, 255];
            for (i, slot) in out.iter_mut().enumerate().take(digits.len() / 2) {
                *slot = byte(i * 2)?;
            }
            Some(out)
        }
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_hex(s) {
            Some(_) => Ok(Self(s.to_string())),
            None => Err(ValueError::Color(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match parse_hex(&value) {
            Some(_) => Ok(Self(value)),
            None => Err(ValueError::Color(value)),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$"
        })
    }
}

/// Shades of a single named color
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Palette(BTreeMap<ShadeKey, Color>);

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a shade
    pub fn with_shade(mut self, key: ShadeKey, color: Color) -> Self {
        self.0.insert(key, color);
        self
    }

    /// Look up a shade
    pub fn get(&self, key: ShadeKey) -> Option<&Color> {
        self.0.get(&key)
    }

    /// Shades in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, &Color)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Number of shades defined
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no shades are defined
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the key set is exactly the standard scale
    pub fn is_complete(&self) -> bool {
        self.missing_shades().is_empty()
    }

    /// Standard shades that this palette does not define
    pub fn missing_shades(&self) -> Vec<ShadeKey> {
        ShadeKey::ALL
            .into_iter()
            .filter(|key| !self.0.contains_key(key))
            .collect()
    }
}

impl FromIterator<(ShadeKey, Color)> for Palette {
    fn from_iter<T: IntoIterator<Item = (ShadeKey, Color)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Hand-written so that a shade written twice (e.g. `50` and `"50"` in YAML)
// is rejected instead of silently keeping the last one.
impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = Palette;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of shade keys to hex colors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Palette, A::Error> {
                let mut shades = BTreeMap::new();
                while let Some((key, color)) = map.next_entry::<ShadeKey, Color>()? {
                    if shades.insert(key, color).is_some() {
                        return Err(de::Error::custom(format!("duplicate shade key {}", key)));
                    }
                }
                Ok(Palette(shades))
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

/// Named palettes merged into the generator's color set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PaletteExtension(BTreeMap<String, Palette>);

impl PaletteExtension {
    /// Create an empty extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a palette
    pub fn with_palette(mut self, name: impl Into<String>, palette: Palette) -> Self {
        self.0.insert(name.into(), palette);
        self
    }

    /// Look up a palette by name
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.0.get(name)
    }

    /// Look up one shade of a palette
    pub fn shade(&self, name: &str, key: ShadeKey) -> Option<&Color> {
        self.get(name).and_then(|palette| palette.get(key))
    }

    /// Palettes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of palettes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no palettes are defined
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, palette: Palette) {
        self.0.insert(name, palette);
    }
}
