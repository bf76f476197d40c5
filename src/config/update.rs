use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How new releases are picked up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMethod {
    /// Ask before installing a new release.
    #[default]
    Prompt,

    /// Install new releases without asking.
    Background,

    /// Never check for new releases.
    Never,
}

impl fmt::Display for UpdateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMethod::Prompt => write!(f, "prompt"),
            UpdateMethod::Background => write!(f, "background"),
            UpdateMethod::Never => write!(f, "never"),
        }
    }
}

crate::scalar_field!(UpdateMethod);

/// Periodic update checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateConfig {
    /// How new releases are picked up.
    pub method: UpdateMethod,

    /// Days between update checks.
    pub days: i64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            method: UpdateMethod::Prompt,
            days: 14,
        }
    }
}

crate::config_section!(UpdateConfig { method, days });
