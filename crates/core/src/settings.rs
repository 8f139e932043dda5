//! Tool settings.
//!
//! Settings files are JSONC: standard JSON plus `//` and `/* */` comments
//! and trailing commas. Loading runs the text through the normalizer first,
//! so the synthetic `"//N"` comment members it produces are simply ignored
//! as unknown fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::jsonfmt::{self, FormatError};

/// Indent width used when normalizing settings text before parsing. Any
/// positive value works; the parse does not care about layout.
const SETTINGS_INDENT: usize = 2;

/// Persistent tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spaces per indent level for formatters.
    pub tab_size: usize,
    /// Maximum number of unnamed binary characters reported by
    /// `binstr::instances`.
    pub instance_limit: usize,
    /// Left/right delimiters for `binstr::translate` tokens.
    pub translate_delims: (String, String),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            instance_limit: 100,
            translate_delims: ("<<".to_string(), ">>".to_string()),
        }
    }
}

/// Failure to load a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The text is not valid JSONC.
    #[error(transparent)]
    Jsonc(#[from] FormatError),
    /// The JSON parsed but the fields have the wrong shape.
    #[error("invalid settings: {0}")]
    Shape(#[from] serde_json::Error),
}

impl Settings {
    /// Parse settings from JSONC text. Missing fields take their defaults.
    pub fn from_jsonc(text: &str) -> Result<Self, SettingsError> {
        let normalized = jsonfmt::normalize(text, SETTINGS_INDENT)?;
        Ok(serde_json::from_str(&normalized)?)
    }

    /// Delimiters as the `binstr` module wants them.
    pub fn delims(&self) -> crate::binstr::Delims {
        crate::binstr::Delims {
            left: self.translate_delims.0.clone(),
            right: self.translate_delims.1.clone(),
        }
    }
}
