//! Dark-mode activation strategy

use crate::error::ValueError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the generator activates `dark:` variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Follow the operating system via `prefers-color-scheme`
    #[default]
    Media,
    /// Toggle with a `dark` class on an ancestor element
    Class,
    /// Newer spelling of the class strategy, matching the element itself too
    Selector,
}

impl DarkModeStrategy {
    /// All recognized strategies
    pub const ALL: [DarkModeStrategy; 3] = [
        DarkModeStrategy::Media,
        DarkModeStrategy::Class,
        DarkModeStrategy::Selector,
    ];

    /// Wire spelling (`media`, `class`, `selector`)
    pub fn as_str(self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "media",
            DarkModeStrategy::Class => "class",
            DarkModeStrategy::Selector => "selector",
        }
    }

    /// The wrapper the generator emits around `dark:` rules
    pub fn variant_selector(self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "@media (prefers-color-scheme: dark)",
            DarkModeStrategy::Class => ".dark &",
            DarkModeStrategy::Selector => "&:where(.dark, .dark *)",
        }
    }
}

impl FromStr for DarkModeStrategy {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ValueError::DarkMode(s.to_string()))
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
