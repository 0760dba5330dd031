//! Container utility settings (`theme.container`)

use crate::tokens::Measurement;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the generator's `container` class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContainerSettings {
    /// Center the container horizontally (`margin-inline: auto`)
    pub center: bool,
    /// Horizontal padding applied at every breakpoint
    pub padding: Measurement,
}

impl ContainerSettings {
    /// Centered container with the given padding
    pub fn centered(padding: Measurement) -> Self {
        Self {
            center: true,
            padding,
        }
    }
}
