//! Shadow and radius design tokens

use crate::error::ValueError;
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex",
];

/// A CSS length such as `1rem`, `12px` or `0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Measurement(String);

impl Measurement {
    /// Wrap a literal that is known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_length(value, false), "invalid measurement literal {value}");
        Self(value.to_string())
    }

    /// The zero length
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// The measurement exactly as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unit suffix, or `None` for unitless zero
    pub fn unit(&self) -> Option<&str> {
        let number_len = self
            .0
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(self.0.len());
        let unit = &self.0[number_len..];
        (!unit.is_empty()).then_some(unit)
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::zero()
    }
}

/// Split a length into number and unit and check both.
fn is_length(value: &str, allow_negative: bool) -> bool {
    let unsigned = match value.strip_prefix('-') {
        Some(rest) if allow_negative => rest,
        Some(_) => return false,
        None => value,
    };

    let number_len = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    let (number, unit) = unsigned.split_at(number_len);

    if number.is_empty() || number == "." || number.matches('.').count() > 1 {
        return false;
    }
    if unit.is_empty() {
        return number.chars().all(|c| c == '0' || c == '.');
    }
    LENGTH_UNITS.contains(&unit)
}

impl FromStr for Measurement {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for Measurement {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_length(&value, false) {
            Ok(Self(value))
        } else {
            Err(ValueError::Measurement(value))
        }
    }
}

impl From<Measurement> for String {
    fn from(value: Measurement) -> Self {
        value.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Measurement {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl JsonSchema for Measurement {
    fn schema_name() -> Cow<'static, str> {
        "Measurement".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^(0*\\.?0*|([0-9]+\\.?[0-9]*|\\.[0-9]+)(px|rem|em|%|vh|vw|vmin|vmax|ch|ex))$"
        })
    }
}

/// A CSS `box-shadow` expression, e.g. `0 10px 30px rgba(0,0,0,.08)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShadowExpr(String);

impl ShadowExpr {
    /// Wrap a literal that is known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(check_shadow(value).is_ok(), "invalid shadow literal {value}");
        Self(value.to_string())
    }

    /// The expression exactly as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comma-separated shadow layers, split at the top level only
    pub fn layers(&self) -> Vec<&str> {
        split_top_level(&self.0, |c| c == ',')
            .into_iter()
            .map(str::trim)
            .collect()
    }
}

/// Split on `is_sep` characters that are not nested inside parentheses.
fn split_top_level(value: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_sep(c) => {
                parts.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}

fn check_shadow(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("expression is empty");
    }

    let mut depth = 0i32;
    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err("unbalanced parentheses");
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced parentheses");
    }

    let layers = split_top_level(value, |c| c == ',');
    if layers.len() == 1 && layers[0].trim() == "none" {
        return Ok(());
    }

    for layer in layers {
        let lengths = split_top_level(layer.trim(), char::is_whitespace)
            .into_iter()
            .filter(|part| !part.is_empty())
            .filter(|part| is_length(part, true))
            .count();
        if lengths < 2 {
            return Err("each layer needs at least an x and y offset");
        }
    }
    Ok(())
}

impl FromStr for ShadowExpr {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for ShadowExpr {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match check_shadow(&value) {
            Ok(()) => Ok(Self(value)),
            Err(reason) => Err(ValueError::Shadow { value, reason }),
        }
    }
}

impl From<ShadowExpr> for String {
    fn from(value: ShadowExpr) -> Self {
        value.0
    }
}

impl fmt::Display for ShadowExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ShadowExpr {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl JsonSchema for ShadowExpr {
    fn schema_name() -> Cow<'static, str> {
        "ShadowExpr".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "minLength": 1
        })
    }
}

/// True for names usable as a class-name segment (`shadow-soft`, `rounded-2xl`)
pub fn is_valid_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// An ordered map of token name to value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TokenMap<T>(BTreeMap<String, T>);

impl<T> Default for TokenMap<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> TokenMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a token
    pub fn with_token(mut self, name: impl Into<String>, value: T) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Look up a token
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.get(name)
    }

    /// Tokens in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Token names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tokens are defined
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, value: T) {
        self.0.insert(name, value);
    }
}

/// Named box shadows (`theme.extend.boxShadow`)
pub type ShadowExtension = TokenMap<ShadowExpr>;

/// Named border radii (`theme.extend.borderRadius`)
pub type RadiusExtension = TokenMap<Measurement>;
