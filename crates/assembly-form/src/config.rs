use serde::Deserialize;

use crate::FormError;

/// Defaults applied when a form is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Initial minimal homology length for Gibson assembly, in bp.
    pub default_minimal_homology: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_minimal_homology: 20,
        }
    }
}

impl FormConfig {
    /// Load from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }
}
