use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::format::DEFAULT_FORMAT;
use crate::error::Result;

/// Output options suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceParams {
    /// printf-style template with a single value placeholder
    pub format: String,
    /// Written between consecutive values
    pub separator: String,
    /// If true, zero-pad every value to the same width
    pub equal_width: bool,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            separator: "\n".to_string(),
            equal_width: false,
        }
    }
}

impl SequenceParams {
    /// True while the template is still the untouched default, which is the
    /// only case where the step's written precision is applied.
    pub fn has_default_format(&self) -> bool {
        self.format == DEFAULT_FORMAT
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
